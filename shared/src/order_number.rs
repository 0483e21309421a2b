//! Order number generation
//!
//! The order number is the only key an anonymous customer holds for
//! tracking, so it is treated as a bearer capability: random, non-sequential
//! and drawn from a large space. Format: `ORD-` followed by 10 Crockford
//! base32 characters (50 bits of entropy). The ambiguous letters I, L, O, U
//! are excluded so the number survives being read aloud over a counter.

use rand::Rng;

/// Crockford base32 alphabet without I, L, O, U
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of random characters after the prefix
const TOKEN_LEN: usize = 10;

/// Prefix marking the token as an order number
pub const PREFIX: &str = "ORD-";

/// Generate a fresh random order number
///
/// Collisions are possible in principle (2^50 space); callers insert under
/// a UNIQUE constraint and regenerate on conflict.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let mut token = String::with_capacity(PREFIX.len() + TOKEN_LEN);
    token.push_str(PREFIX);
    for _ in 0..TOKEN_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        token.push(ALPHABET[idx] as char);
    }
    token
}

/// Check that a string has the shape of an order number
pub fn is_valid_format(value: &str) -> bool {
    let Some(token) = value.strip_prefix(PREFIX) else {
        return false;
    };
    token.len() == TOKEN_LEN && token.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format() {
        let number = generate();
        assert!(number.starts_with("ORD-"));
        assert_eq!(number.len(), PREFIX.len() + TOKEN_LEN);
        assert!(is_valid_format(&number));
    }

    #[test]
    fn test_charset_excludes_ambiguous_letters() {
        for _ in 0..100 {
            let number = generate();
            let token = number.strip_prefix(PREFIX).unwrap();
            for c in token.chars() {
                assert!(!"ILOU".contains(c), "ambiguous char {c} in {number}");
                assert!(!c.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_not_sequential() {
        // 1000 generations, no duplicates and no lexicographic run
        let numbers: Vec<String> = (0..1000).map(|_| generate()).collect();
        let unique: HashSet<&String> = numbers.iter().collect();
        assert_eq!(unique.len(), numbers.len());

        let sorted_runs = numbers.windows(2).filter(|w| w[0] < w[1]).count();
        // Random ordering keeps ascending adjacent pairs near 50%
        assert!(sorted_runs > 300 && sorted_runs < 700);
    }

    #[test]
    fn test_invalid_formats_rejected() {
        assert!(!is_valid_format("ORD-"));
        assert!(!is_valid_format("ORD-123"));
        assert!(!is_valid_format("XYZ-9M4KTE2XQP"));
        assert!(!is_valid_format("ORD-9M4KTE2XQI")); // I excluded
        assert!(!is_valid_format("ord-9m4kte2xqp"));
    }
}
