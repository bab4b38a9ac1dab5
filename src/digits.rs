//!
//! Digit extraction.
//!
//! Only ascii digits count. Everything else in a display text is
//! either a mask literal or garbage from the widget.
//!

/// The ascii digits of `s`, in order.
pub fn digits_of(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ascii digits in `s`.
pub fn digit_count(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}

/// All chars are ascii digits. True for the empty string.
pub fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod test_digits {
    use crate::digits::{digit_count, digits_of, is_all_digits};

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of(""), "");
        assert_eq!(digits_of("+7 (999) 123-45-67"), "79991234567");
        assert_eq!(digits_of("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(digits_of("abc"), "");
        // no other digit scripts
        assert_eq!(digits_of("١٢٣4"), "4");
    }

    #[test]
    fn test_digits_of_idempotent() {
        for s in ["", "+7 999", "x1y2z3", "(((", "42"] {
            let d = digits_of(s);
            assert_eq!(digits_of(&d), d);
            assert!(d.len() <= s.len());
            assert_eq!(digit_count(s), d.len());
        }
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits(""));
        assert!(is_all_digits("375"));
        assert!(!is_all_digits("+7"));
        assert!(!is_all_digits("7 "));
    }
}
