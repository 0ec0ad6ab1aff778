/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

const IDEMPOTENCY_ALPHABET: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a random idempotency key for write operations.
///
/// The request pipeline never attaches a key on its own: callers decide per
/// call whether a write may be replayed safely and pass the key explicitly,
/// e.g. with [`ApiRequest::with_idempotency_key`](crate::model::requests::ApiRequest::with_idempotency_key).
///
/// The key is 32 characters long and made of lowercase letters and digits.
///
/// # Examples
/// ```
/// use pingen_client::utils::id::new_idempotency_key;
/// let key = new_idempotency_key();
/// assert_eq!(key.len(), 32);
/// ```
pub fn new_idempotency_key() -> String {
    nanoid::nanoid!(32, &IDEMPOTENCY_ALPHABET)
}
