use ldap_encoder::{
    distinguished_name_encode, distinguished_name_encode_opt, distinguished_name_encode_with,
    distinguished_name_encode_with_opt, Encoder,
};
use test_case::test_case;

#[test_case(",+\"\\<>;", "\\,\\+\\\"\\\\\\<\\>\\;"; "backslash escaped specials")]
#[test_case("  abcdef", "\\  abcdef"; "leading spaces")]
#[test_case("abcdef  ", "abcdef \\ "; "trailing spaces")]
#[test_case(" ", "\\ "; "single space")]
#[test_case("##abcdef", "\\##abcdef"; "leading hash")]
#[test_case("\u{0}", "#00"; "nul")]
#[test_case("\u{7f}", "#7F"; "delete")]
#[test_case("a=b&c|d!e-f'g", "a#3Db#26c#7Cd#21e#2Df#27g"; "injection operators")]
#[test_case("Lučić", "Lu#C4#8Di#C4#87"; "multibyte characters")]
#[test_case("(cn=*)", "(cn#3D*)"; "filter characters are safe")]
fn dn_vectors(input: &str, expected: &str) {
    assert_eq!(distinguished_name_encode(input), expected);
}

#[test_case("##abcdef", true, "##abcdef"; "hash kept without initial rules")]
#[test_case("  abcdef", true, "  abcdef"; "space kept without initial rules")]
#[test_case("abcdef  ", true, "abcdef \\ "; "final rule still on")]
#[test_case(" abc ", false, " abc "; "no rules")]
fn dn_without_initial_rules(input: &str, final_rule: bool, expected: &str) {
    assert_eq!(distinguished_name_encode_with(input, false, final_rule), expected);
}

#[test]
fn final_rule_off_keeps_trailing_space() {
    assert_eq!(distinguished_name_encode_with("abcdef# ", true, false), "abcdef# ");
    assert_eq!(distinguished_name_encode_with("abcdef  ", true, false), "abcdef  ");
}

#[test]
fn single_space_is_escaped_once() {
    assert_eq!(distinguished_name_encode_with(" ", true, true), "\\ ");
    assert_eq!(distinguished_name_encode_with(" ", false, true), "\\ ");
    assert_eq!(distinguished_name_encode_with(" ", true, false), "\\ ");
    assert_eq!(distinguished_name_encode_with(" ", false, false), " ");
}

#[test]
fn hash_is_only_special_in_front() {
    assert_eq!(distinguished_name_encode("a#b#"), "a#b#");
    assert_eq!(distinguished_name_encode("#"), "\\#");
}

#[test]
fn empty_and_missing_values_pass_through() {
    assert_eq!(distinguished_name_encode(""), "");
    assert_eq!(distinguished_name_encode_opt(None), None);
    assert_eq!(distinguished_name_encode_with_opt(None, false, false), None);
    assert_eq!(
        distinguished_name_encode_with_opt(Some(" x "), true, false).as_deref(),
        Some("\\ x ")
    );
    assert_eq!(distinguished_name_encode_opt(Some(",")).as_deref(), Some("\\,"));
}

#[test]
fn encoding_twice_escapes_the_escapes() {
    let once = distinguished_name_encode("a,b");
    assert_eq!(once, "a\\,b");
    assert_eq!(distinguished_name_encode(&once), "a\\\\\\,b");
}

#[test]
fn shared_encoder_is_built_once_across_threads() {
    let handles: Vec<_> = (0..16)
        .map(|_| std::thread::spawn(|| Encoder::distinguished_name() as *const Encoder as usize))
        .collect();
    let first = Encoder::distinguished_name() as *const Encoder as usize;
    for h in handles {
        assert_eq!(h.join().expect("thread panicked"), first);
    }
}
