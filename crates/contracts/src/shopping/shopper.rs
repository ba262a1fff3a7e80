//! Анонимный идентификатор покупателя.
//!
//! The id scopes a shopper's quotations: 128 random bits, hex encoded.
//! The backend ignores owner filters of any other shape.

pub const SHOPPER_ID_PREFIX: &str = "guest-";
pub const SHOPPER_ID_BYTES: usize = 16;

pub fn shopper_id_from_bytes(bytes: &[u8; SHOPPER_ID_BYTES]) -> String {
    let mut id = String::with_capacity(SHOPPER_ID_PREFIX.len() + SHOPPER_ID_BYTES * 2);
    id.push_str(SHOPPER_ID_PREFIX);
    for b in bytes {
        id.push_str(&format!("{:02x}", b));
    }
    id
}

/// `guest-` followed by exactly 32 lowercase hex digits.
pub fn is_valid_shopper_id(id: &str) -> bool {
    match id.strip_prefix(SHOPPER_ID_PREFIX) {
        Some(hex) => {
            hex.len() == SHOPPER_ID_BYTES * 2
                && hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_bytes() {
        let mut bytes = [0u8; SHOPPER_ID_BYTES];
        bytes[0] = 0xab;
        bytes[15] = 0x01;
        let id = shopper_id_from_bytes(&bytes);
        assert_eq!(id, "guest-ab000000000000000000000000000001");
        assert!(is_valid_shopper_id(&id));
    }

    #[test]
    fn test_rejects_guessable_ids() {
        assert!(!is_valid_shopper_id(""));
        assert!(!is_valid_shopper_id("u1"));
        assert!(!is_valid_shopper_id("guest-"));
        // старый формат: время + 32 бита
        assert!(!is_valid_shopper_id("guest-18c2f3a1b0000000001"));
        assert!(!is_valid_shopper_id("guest-AB000000000000000000000000000001"));
        assert!(!is_valid_shopper_id("guest-zz000000000000000000000000000001"));
        assert!(!is_valid_shopper_id("user-ab000000000000000000000000000001"));
    }
}
