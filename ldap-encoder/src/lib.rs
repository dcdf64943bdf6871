//! Safe-listing encoder for values placed into LDAP search filters
//! (RFC 4515) and distinguished names (RFC 2253).
//!
//! Every byte of the input is either on the mode's safe list and copied as
//! is, or replaced by an escape sequence. Nothing is ever rejected.
//!
//! ```
//! use ldap_encoder::{distinguished_name_encode, filter_encode};
//!
//! assert_eq!(filter_encode("(uid=*)"), "\\28uid=\\2a\\29");
//! assert_eq!(distinguished_name_encode(" Smith, John"), "\\ Smith\\, John");
//! ```
//!
//! Encoding is not idempotent: escaped output fed back in has its escape
//! characters escaped again. Encode each raw value exactly once.

pub mod config;
pub mod encoder;
pub mod safe_list;

use std::borrow::Cow;

pub use code_charts;
pub use config::{CodeChartsConfig, DistinguishedNameConfig, EncoderConfig};
pub use encoder::{DnRules, Encoder, EncodingMode};
pub use safe_list::{Entry, EscapeGenerator, SafeList};

/// Encodes a value for use inside an LDAP search filter.
pub fn filter_encode(input: &str) -> Cow<'_, str> {
    Encoder::filter().encode(input)
}

/// Encodes a distinguished name attribute value with both positional rules.
pub fn distinguished_name_encode(input: &str) -> Cow<'_, str> {
    Encoder::distinguished_name().encode_with(input, DnRules::ALL)
}

/// Encodes a distinguished name attribute value.
///
/// `use_initial_character_rules` escapes a leading space or `#`;
/// `use_final_character_rule` escapes a trailing space. Turn them off when
/// the value is only one part of a larger component.
pub fn distinguished_name_encode_with(
    input: &str,
    use_initial_character_rules: bool,
    use_final_character_rule: bool,
) -> Cow<'_, str> {
    Encoder::distinguished_name().encode_with(
        input,
        DnRules::new(use_initial_character_rules, use_final_character_rule),
    )
}

pub fn filter_encode_opt(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(filter_encode)
}

pub fn distinguished_name_encode_opt(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(distinguished_name_encode)
}

pub fn distinguished_name_encode_with_opt(
    input: Option<&str>,
    use_initial_character_rules: bool,
    use_final_character_rule: bool,
) -> Option<Cow<'_, str>> {
    input.map(|value| {
        distinguished_name_encode_with(value, use_initial_character_rules, use_final_character_rule)
    })
}
