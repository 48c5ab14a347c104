//! Property tests for the string layer against `std` string behavior.

#![cfg(not(miri))]

use darray_string::DString;
use proptest::prelude::*;

fn text(s: &str) -> DString {
    DString::from_bytes(s.as_bytes()).unwrap()
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

proptest! {
    #[test]
    fn from_bytes_keeps_length_and_terminator(bytes in prop::collection::vec(1u8.., 0..64)) {
        let s = DString::from_bytes(&bytes).unwrap();
        prop_assert_eq!(s.len(), bytes.len());
        prop_assert_eq!(s.as_bytes(), bytes.as_slice());
        prop_assert_eq!(s.as_bytes_with_nul().len(), bytes.len() + 1);
        prop_assert_eq!(s.as_bytes_with_nul()[bytes.len()], 0);
    }

    #[test]
    fn concat_matches_string_push(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let s = text(&a).concat_bytes(b.as_bytes()).unwrap();
        let expected = format!("{a}{b}");
        prop_assert_eq!(s, expected.as_str());
    }

    #[test]
    fn compare_sign_matches_byte_order(a in "[a-c]{0,6}", b in "[a-c]{0,6}") {
        let sign = text(&a).compare(b.as_bytes()).signum();
        let expected = match a.as_bytes().cmp(b.as_bytes()) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        prop_assert_eq!(sign, expected);
    }

    #[test]
    fn case_insensitive_compare_ignores_case(a in "[a-zA-Z]{0,20}") {
        prop_assert_eq!(text(&a).compare_case_insensitive(a.to_uppercase().as_bytes()), 0);
        prop_assert_eq!(text(&a).compare_case_insensitive(a.to_lowercase().as_bytes()), 0);
    }

    #[test]
    fn find_matches_str_find(haystack in "[ab]{0,24}", needle in "[ab]{0,4}") {
        prop_assert_eq!(text(&haystack).find(needle.as_bytes()), haystack.find(&needle));
    }

    #[test]
    fn replace_all_matches_str_replace(
        haystack in "[ab]{0,24}",
        pattern in "[ab]{1,3}",
        replacement in "[ab]{0,4}",
    ) {
        let s = text(&haystack)
            .replace_all(pattern.as_bytes(), replacement.as_bytes())
            .unwrap();
        let expected = haystack.replace(&pattern, &replacement);
        prop_assert_eq!(s, expected.as_str());
    }

    #[test]
    fn case_transforms_are_idempotent(a in "[ -~]{0,32}") {
        let mut upper = text(&a);
        upper.to_uppercase();
        let once = upper.try_clone().unwrap();
        upper.to_uppercase();
        prop_assert_eq!(&upper, &once);
        let expected = a.to_ascii_uppercase();
        prop_assert_eq!(upper, expected.as_str());

        let mut lower = text(&a);
        lower.to_lowercase();
        let once = lower.try_clone().unwrap();
        lower.to_lowercase();
        prop_assert_eq!(&lower, &once);
        prop_assert_eq!(lower.len(), a.len());
    }

    #[test]
    fn trim_matches_str_trim(a in "[ \t\na-c]{0,16}") {
        let mut s = text(&a);
        s.trim();
        prop_assert_eq!(s, a.trim_matches(is_space));
    }
}
