pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 32;

/// Checks a candidate todo name.
///
/// Returns a user-facing message when the name is too short or too long, and an
/// empty string when it is acceptable. Length is counted in characters, so
/// non-ASCII names get the same budget as ASCII ones.
pub fn validate_name(name: &str) -> String {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        format!(
            "Name must be between {} and {} characters",
            MIN_NAME_LEN, MAX_NAME_LEN
        )
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_length_in_range() {
        for len in MIN_NAME_LEN..=MAX_NAME_LEN {
            assert_eq!(validate_name(&"x".repeat(len)), "", "length {}", len);
        }
    }

    #[test]
    fn rejects_lengths_outside_range() {
        for len in [0, 1, 33, 64] {
            assert!(!validate_name(&"x".repeat(len)).is_empty(), "length {}", len);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 16 characters, 48 bytes
        assert_eq!(validate_name(&"買".repeat(16)), "");
        assert!(!validate_name("買").is_empty());
    }

    #[test]
    fn same_message_every_time() {
        assert_eq!(validate_name("A"), validate_name(&"A".repeat(40)));
    }
}
