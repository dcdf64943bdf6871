use std::borrow::Cow;

use ldap_encoder::{filter_encode, filter_encode_opt, Encoder};
use test_case::test_case;

#[test_case("Parens R Us (for all your parenthetical needs)", "Parens R Us \\28for all your parenthetical needs\\29"; "parentheses")]
#[test_case("*", "\\2a"; "asterisk")]
#[test_case("C:\\MyFile", "C:\\5cMyFile"; "backslash")]
#[test_case("\u{0}\u{0}\u{0}\u{4}", "\\00\\00\\00\\04"; "control bytes")]
#[test_case("Lučić", "Lu\\c4\\8di\\c4\\87"; "multibyte characters")]
#[test_case("\u{7f}", "\\7f"; "delete")]
#[test_case("a/b", "a\\2fb"; "slash")]
#[test_case("(&(uid=*)(|(a=b)))", "\\28&\\28uid=\\2a\\29\\28|\\28a=b\\29\\29\\29"; "injection payload")]
#[test_case("tab\there", "tab\\09here"; "tab")]
fn filter_vectors(input: &str, expected: &str) {
    assert_eq!(filter_encode(input), expected);
}

#[test]
fn empty_and_missing_values_pass_through() {
    assert_eq!(filter_encode(""), "");
    assert_eq!(filter_encode_opt(None), None);
    assert_eq!(filter_encode_opt(Some("")).as_deref(), Some(""));
    assert_eq!(filter_encode_opt(Some("*")).as_deref(), Some("\\2a"));
}

#[test]
fn safe_bytes_are_copied_unchanged() {
    for b in 0x20u8..=0x7E {
        if b"()*/\\".contains(&b) {
            continue;
        }
        let s = char::from(b).to_string();
        assert!(
            matches!(filter_encode(&s), Cow::Borrowed(_)),
            "{s:?} should pass through"
        );
    }
}

#[test]
fn unsafe_ascii_bytes_become_slash_hex() {
    for b in (0x00u8..=0x7F).filter(|b| !(0x20..=0x7E).contains(b) || b"()*/\\".contains(b)) {
        let s = char::from(b).to_string();
        assert_eq!(filter_encode(&s), format!("\\{b:02x}"));
    }
}

#[test]
fn leading_and_trailing_spaces_are_plain() {
    assert_eq!(filter_encode(" # "), " # ");
}

#[test]
fn encoding_twice_escapes_the_escapes() {
    let once = filter_encode("*");
    assert_eq!(once, "\\2a");
    assert_eq!(filter_encode(&once), "\\5c2a");
}

#[test]
fn shared_encoder_is_built_once_across_threads() {
    let handles: Vec<_> = (0..16)
        .map(|_| std::thread::spawn(|| Encoder::filter() as *const Encoder as usize))
        .collect();
    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(addresses[0], Encoder::filter() as *const Encoder as usize);
}
