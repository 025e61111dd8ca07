// Hash Index Tests - Stage 1: Test-Driven Development
// These tests define the expected behavior of the fixed-bucket hash index

use anyhow::Result;
use termindex::{DocumentRef, HashTableIndex, ValidatedTerm};

#[test]
fn test_insert_and_search() -> Result<()> {
    let mut index: HashTableIndex<&str, &str> = HashTableIndex::new(10)?;

    index.insert("banana", "json.8");
    index.insert("banana", "json.10");
    index.insert("lmfao", "json.11");

    assert_eq!(index.get(&"banana"), Some(&["json.8", "json.10"][..]));
    assert_eq!(index.get(&"lmfao"), Some(&["json.11"][..]));
    assert_eq!(index.get(&"missing"), None);
    assert!(index.contains_key(&"banana"));
    assert!(!index.contains_key(&"missing"));

    assert_eq!(index.distinct_keys(), 2);
    assert_eq!(index.total_values(), 3);
    Ok(())
}

#[test]
fn test_remove_targets_only_requested_key() -> Result<()> {
    let mut index: HashTableIndex<&str, &str> = HashTableIndex::new(10)?;

    index.insert("banana", "json.8");
    index.insert("banana", "json.10");
    index.insert("apple", "json.9");

    assert!(index.remove(&"banana"));
    assert_eq!(index.get(&"banana"), None);
    assert_eq!(index.get(&"apple"), Some(&["json.9"][..]));
    assert_eq!(index.distinct_keys(), 1);
    assert_eq!(index.total_values(), 1);

    // Removing an absent key reports false and changes nothing
    assert!(!index.remove(&"banana"));
    assert_eq!(index.total_values(), 1);
    Ok(())
}

#[test]
fn test_single_bucket_forces_collisions() -> Result<()> {
    // Every key lands in the same chain, so this exercises the full scan
    let mut index: HashTableIndex<&str, usize> = HashTableIndex::new(1)?;

    for key in ["alpha", "beta", "gamma", "delta"] {
        index.insert(key, key.len());
    }

    assert_eq!(index.get(&"alpha"), Some(&[5][..]));
    assert_eq!(index.get(&"delta"), Some(&[5][..]));
    assert_eq!(index.distinct_keys(), 4);

    assert!(index.remove(&"beta"));
    assert_eq!(index.get(&"beta"), None);
    assert_eq!(index.get(&"gamma"), Some(&[5][..]));
    assert_eq!(index.distinct_keys(), 3);
    Ok(())
}

#[test]
fn test_bucket_count_validation() {
    assert!(HashTableIndex::<&str, &str>::new(0).is_err());
    assert!(HashTableIndex::<&str, &str>::new(1 << 30).is_err());
    assert!(HashTableIndex::<&str, &str>::new(1).is_ok());
}

#[test]
fn test_bucket_stats_reflect_occupancy() -> Result<()> {
    let mut index: HashTableIndex<i32, &str> = HashTableIndex::new(4)?;

    let empty_stats = index.bucket_stats();
    assert_eq!(empty_stats.bucket_count, 4);
    assert_eq!(empty_stats.occupied_buckets, 0);
    assert_eq!(empty_stats.max_entries_per_bucket, 0);

    for key in 0..16 {
        index.insert(key, "doc");
    }

    let stats = index.bucket_stats();
    assert_eq!(stats.bucket_count, 4);
    assert!(stats.occupied_buckets > 0);
    assert!(stats.occupied_buckets <= 4);
    // 16 keys over at most 4 chains
    assert!(stats.max_entries_per_bucket >= 4);
    Ok(())
}

#[test]
fn test_validated_terms_as_keys() -> Result<()> {
    let mut index: HashTableIndex<ValidatedTerm, DocumentRef> = HashTableIndex::new(16)?;

    let banana = ValidatedTerm::new("banana")?;
    index.insert(banana.clone(), DocumentRef::new("json.8")?);
    index.insert(banana.clone(), DocumentRef::new("json.10")?);

    let postings = index.get(&banana).expect("term is indexed");
    assert_eq!(postings.len(), 2);
    assert_eq!(postings[0].as_str(), "json.8");
    assert_eq!(postings[1].as_str(), "json.10");
    Ok(())
}

#[test]
fn test_same_key_hashes_to_same_bucket() -> Result<()> {
    // Re-inserting a key must extend its entry, not create a sibling
    let mut index: HashTableIndex<String, i32> = HashTableIndex::new(64)?;

    for i in 0..10 {
        index.insert("stable".to_string(), i);
    }

    assert_eq!(index.distinct_keys(), 1);
    assert_eq!(index.total_values(), 10);
    assert_eq!(
        index.get(&"stable".to_string()),
        Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][..])
    );
    Ok(())
}

#[test]
fn test_empty_index_reports_empty() -> Result<()> {
    let index: HashTableIndex<&str, &str> = HashTableIndex::new(8)?;

    assert!(index.is_empty());
    assert_eq!(index.distinct_keys(), 0);
    assert_eq!(index.total_values(), 0);
    assert_eq!(index.bucket_count(), 8);
    Ok(())
}
