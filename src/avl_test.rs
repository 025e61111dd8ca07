// Module test for AVL tree implementation
#[cfg(test)]
mod tests {
    use crate::{avl, tree, DocumentRef, ValidatedTerm};

    #[test]
    fn test_avl_insert_with_validated_terms() {
        let banana = ValidatedTerm::new("banana").unwrap();
        let apple = ValidatedTerm::new("apple").unwrap();
        let cherry = ValidatedTerm::new("cherry").unwrap();

        let mut index = tree::create_empty_tree();
        index = avl::insert_into_tree(index, banana.clone(), DocumentRef::new("json.8").unwrap());
        index = avl::insert_into_tree(index, apple.clone(), DocumentRef::new("json.9").unwrap());
        index = avl::insert_into_tree(index, cherry.clone(), DocumentRef::new("json.11").unwrap());

        assert!(avl::is_valid_avl(&index));
        assert_eq!(
            tree::find_values(&index.root, &banana),
            Some(&[DocumentRef::new("json.8").unwrap()][..])
        );
        assert_eq!(
            tree::keys_in_order(&index.root),
            vec![&apple, &banana, &cherry]
        );
    }

    #[test]
    fn test_avl_term_in_multiple_documents() {
        let term = ValidatedTerm::new("lmfao").unwrap();

        let mut index = tree::create_empty_tree();
        index = avl::insert_into_tree(index, term.clone(), DocumentRef::new("json.10").unwrap());
        index = avl::insert_into_tree(index, term.clone(), DocumentRef::new("json.11").unwrap());

        // Postings keep arrival order and repeats are never collapsed
        let postings = tree::find_values(&index.root, &term).unwrap();
        assert_eq!(
            postings,
            &[
                DocumentRef::new("json.10").unwrap(),
                DocumentRef::new("json.11").unwrap(),
            ][..]
        );
        assert_eq!(index.distinct_keys, 1);
        assert_eq!(index.total_values, 2);
    }

    #[test]
    fn test_avl_many_terms_stay_sorted() {
        let terms: Vec<_> = (0..40)
            .map(|i| ValidatedTerm::new(format!("term_{:02}", (i * 17) % 40)).unwrap())
            .collect();

        let mut index = tree::create_empty_tree();
        for (i, term) in terms.iter().enumerate() {
            let doc = DocumentRef::new(format!("docs/report_{i}.json")).unwrap();
            index = avl::insert_into_tree(index, term.clone(), doc);
        }

        assert!(avl::is_valid_avl(&index));
        assert_eq!(tree::count_nodes(&index.root), 40);

        let keys = tree::keys_in_order(&index.root);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
