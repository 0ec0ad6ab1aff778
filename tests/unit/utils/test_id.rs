use pingen_client::utils::id::new_idempotency_key;
use std::collections::HashSet;

#[test]
fn test_idempotency_keys_are_distinct() {
    let keys: HashSet<String> = (0..100).map(|_| new_idempotency_key()).collect();
    assert_eq!(keys.len(), 100);
}

#[test]
fn test_idempotency_key_is_header_safe() {
    let key = new_idempotency_key();
    assert!(reqwest::header::HeaderValue::from_str(&key).is_ok());
    assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
}
