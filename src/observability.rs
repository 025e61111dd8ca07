// Centralized Observability Infrastructure - Stage 4
// This module provides structured logging, metrics, and tracing capabilities
// for the index engines and their wrappers

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

// Global atomic counters for metrics
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNTER: AtomicU64 = AtomicU64::new(0);
static INSERT_COUNTER: AtomicU64 = AtomicU64::new(0);
static LOOKUP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Initialize the logging and tracing infrastructure
/// This should be called once at application startup
pub fn init_logging() -> Result<()> {
    init_logging_with_level(false, false)
}

/// Initialize logging with configurable verbosity
pub fn init_logging_with_level(verbose: bool, quiet: bool) -> Result<()> {
    let filter_level = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("termindex=debug,info")
    } else {
        // Warnings and errors for this crate, errors only for dependencies
        EnvFilter::new("termindex=warn,error")
    };

    // Quiet takes precedence over RUST_LOG so --quiet always suppresses logs
    let env_filter = if quiet {
        EnvFilter::new("error")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env().unwrap_or(filter_level)
    } else {
        filter_level
    };

    // Minimal output without source metadata in quiet mode
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(!quiet)
        .with_thread_ids(!quiet)
        .with_line_number(!quiet)
        .with_file(!quiet)
        .with_ansi(true);

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        Ok(()) => {
            if !quiet {
                info!("termindex observability initialized");
            }
            Ok(())
        }
        Err(_) => {
            // Already initialized, which is fine in test environments
            Ok(())
        }
    }
}

/// Represents different types of index operations for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    IndexInsert {
        index_type: String,
        term: String,
    },
    IndexRemove {
        index_type: String,
        term: String,
    },
    IndexLookup {
        index_type: String,
        term: String,
        value_count: usize,
    },
    IndexTraversal {
        index_type: String,
        key_count: usize,
    },
}

impl Operation {
    /// Validate the operation parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Operation::IndexInsert { index_type, .. }
            | Operation::IndexRemove { index_type, .. }
            | Operation::IndexLookup { index_type, .. }
            | Operation::IndexTraversal { index_type, .. } => {
                if index_type.is_empty() {
                    anyhow::bail!("Index operation with empty index type");
                }
            }
        }
        Ok(())
    }
}

/// Metric types for performance monitoring
#[derive(Debug, Clone)]
pub enum MetricType {
    Counter {
        name: &'static str,
        value: u64,
    },
    Gauge {
        name: &'static str,
        value: f64,
    },
    Histogram {
        name: &'static str,
        value: f64,
        unit: &'static str,
    },
    Timer {
        name: &'static str,
        duration: Duration,
    },
}

/// Operation context for tracing through the system
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub trace_id: Uuid,
    pub span_id: Uuid,
    pub parent_span_id: Option<Uuid>,
    pub operation: String,
    pub start_time: Instant,
    pub attributes: Vec<(String, String)>,
}

impl OperationContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            span_id: Uuid::new_v4(),
            parent_span_id: None,
            operation: operation.into(),
            start_time: Instant::now(),
            attributes: Vec::new(),
        }
    }

    pub fn child(&self, operation: impl Into<String>) -> Self {
        Self {
            trace_id: self.trace_id,
            span_id: Uuid::new_v4(),
            parent_span_id: Some(self.span_id),
            operation: operation.into(),
            start_time: Instant::now(),
            attributes: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Log an operation with full context
#[instrument(skip(ctx))]
pub fn log_operation(ctx: &OperationContext, op: &Operation, result: &Result<()>) {
    let elapsed = ctx.elapsed();
    let attrs = ctx
        .attributes
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ");

    match result {
        Ok(()) => {
            info!(
                trace_id = %ctx.trace_id,
                span_id = %ctx.span_id,
                parent_span_id = ?ctx.parent_span_id,
                operation = %ctx.operation,
                elapsed_ms = elapsed.as_millis(),
                attributes = %attrs,
                "Operation completed: {:?}", op
            );
            OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
        }
        Err(e) => {
            error!(
                trace_id = %ctx.trace_id,
                span_id = %ctx.span_id,
                parent_span_id = ?ctx.parent_span_id,
                operation = %ctx.operation,
                elapsed_ms = elapsed.as_millis(),
                attributes = %attrs,
                error = %e,
                "Operation failed: {:?}", op
            );
            ERROR_COUNTER.fetch_add(1, Ordering::Relaxed);
        }
    }

    match op {
        Operation::IndexInsert { .. } => {
            INSERT_COUNTER.fetch_add(1, Ordering::Relaxed);
        }
        Operation::IndexLookup { .. } | Operation::IndexTraversal { .. } => {
            LOOKUP_COUNTER.fetch_add(1, Ordering::Relaxed);
        }
        _ => {}
    }
}

/// Record a metric
pub fn record_metric(metric: MetricType) {
    match metric {
        MetricType::Counter { name, value } => {
            debug!("metric.counter {} = {}", name, value);
        }
        MetricType::Gauge { name, value } => {
            debug!("metric.gauge {} = {}", name, value);
        }
        MetricType::Histogram { name, value, unit } => {
            debug!("metric.histogram {} = {} {}", name, value, unit);
        }
        MetricType::Timer { name, duration } => {
            debug!("metric.timer {} = {:?}", name, duration);
        }
    }
}

/// Execute a closure with a trace context
pub fn with_trace_id<F, T>(operation: &str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let ctx = OperationContext::new(operation);
    let trace_id = ctx.trace_id;
    let span_id = ctx.span_id;

    info!(
        trace_id = %trace_id,
        span_id = %span_id,
        "Starting operation: {}", operation
    );

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    match &result {
        Ok(_) => {
            info!(
                trace_id = %trace_id,
                span_id = %span_id,
                elapsed_ms = elapsed.as_millis(),
                "Operation completed successfully: {}", operation
            );
            record_metric(MetricType::Timer {
                name: "operation.duration",
                duration: elapsed,
            });
        }
        Err(e) => {
            error!(
                trace_id = %trace_id,
                span_id = %span_id,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Operation failed: {}", operation
            );
            record_metric(MetricType::Counter {
                name: "operation.errors",
                value: 1,
            });
        }
    }

    result
}

/// Get current metrics snapshot
pub fn get_metrics() -> serde_json::Value {
    serde_json::json!({
        "operations": {
            "total": OPERATION_COUNTER.load(Ordering::Relaxed),
            "errors": ERROR_COUNTER.load(Ordering::Relaxed),
            "inserts": INSERT_COUNTER.load(Ordering::Relaxed),
            "lookups": LOOKUP_COUNTER.load(Ordering::Relaxed),
        },
        "timestamp": Utc::now().to_rfc3339(),
    })
}

/// Structured error logging with context
#[instrument]
pub fn log_error_with_context(error: &anyhow::Error, ctx: &OperationContext) {
    let error_chain = error
        .chain()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");

    error!(
        trace_id = %ctx.trace_id,
        span_id = %ctx.span_id,
        operation = %ctx.operation,
        error_chain = %error_chain,
        "Error occurred during operation"
    );
}

/// Performance timer for measuring operation duration
pub struct PerfTimer {
    name: String,
    start: Instant,
    ctx: OperationContext,
}

impl PerfTimer {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ctx = OperationContext::new(&name);
        debug!(
            trace_id = %ctx.trace_id,
            span_id = %ctx.span_id,
            "Timer started: {}", name
        );
        Self {
            name,
            start: Instant::now(),
            ctx,
        }
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        debug!(
            trace_id = %self.ctx.trace_id,
            span_id = %self.ctx.span_id,
            elapsed_ms = elapsed.as_millis(),
            "Timer completed: {}", self.name
        );
        record_metric(MetricType::Timer {
            name: "perf.timer",
            duration: elapsed,
        });
    }
}
