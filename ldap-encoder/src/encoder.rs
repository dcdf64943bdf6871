//! Filter (RFC 4515) and distinguished name (RFC 2253) encoding.
//!
//! Both modes walk the UTF-8 bytes of the input once and replace every byte
//! whose safe-list slot is escaped. Distinguished names add positional rules
//! for a leading space or `#` and a trailing space, checked before the table.
//!
//! The two stock encoders are built lazily, once per process, and shared
//! read-only from then on.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use code_charts::{CodeChart, CodeChartProvider};
use once_cell::sync::OnceCell;

use crate::safe_list::{self, EscapeGenerator, SafeList};

/// Base safe range for both modes before reserved characters are taken out.
const PRINTABLE_ASCII: RangeInclusive<u32> = 0x20..=0x7E;

/// RFC 4515 value characters that always stay escaped, plus `/`.
const FILTER_RESERVED: &[char] = &['(', ')', '*', '/', '\\'];

/// RFC 2253 specials and the operators used in LDAP injection payloads.
const DN_RESERVED: &[char] = &[
    ',', '+', '"', '\\', '<', '>', '&', '!', '|', '=', '-', '\'', ';',
];

/// DN characters written as `\` + the character instead of `#XX`.
const DN_BACKSLASH_ESCAPED: &[char] = &[',', '+', '"', '\\', '<', '>', ';'];

/// Table size for the stock modes: one slot per byte value.
const BYTE_TABLE_LAST: usize = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Values inside an LDAP search filter.
    Filter,
    /// Attribute values inside a distinguished name.
    DistinguishedName,
}

impl EncodingMode {
    pub fn generator(self) -> EscapeGenerator {
        match self {
            EncodingMode::Filter => safe_list::slash_then_hex,
            EncodingMode::DistinguishedName => safe_list::hash_then_hex,
        }
    }

    /// Printable ASCII characters this mode never lets through.
    pub fn reserved(self) -> &'static [char] {
        match self {
            EncodingMode::Filter => FILTER_RESERVED,
            EncodingMode::DistinguishedName => DN_RESERVED,
        }
    }

    /// Characters escaped as backslash + character.
    pub fn backslash_escaped(self) -> &'static [char] {
        match self {
            EncodingMode::Filter => &[],
            EncodingMode::DistinguishedName => DN_BACKSLASH_ESCAPED,
        }
    }

    fn base_safe_values(self) -> impl Iterator<Item = u32> {
        let reserved = self.reserved();
        PRINTABLE_ASCII.filter(move |value| !reserved.iter().any(|&c| u32::from(c) == *value))
    }

    fn base_safe_list(self, last: usize) -> SafeList {
        let mut list = SafeList::generate(last, self.generator());
        list.punch(self.base_safe_values());
        list
    }

    fn apply_backslash_escapes(self, list: &mut SafeList) {
        for &ch in self.backslash_escaped() {
            list.escape_character(ch, &format!("\\{ch}"));
        }
    }
}

/// Positional escaping for distinguished names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnRules {
    /// Escape a space or `#` in the first position.
    pub initial_character: bool,
    /// Escape a space in the last position.
    pub final_character: bool,
}

impl DnRules {
    pub const ALL: Self = Self {
        initial_character: true,
        final_character: true,
    };

    pub const NONE: Self = Self {
        initial_character: false,
        final_character: false,
    };

    pub fn new(initial_character: bool, final_character: bool) -> Self {
        Self {
            initial_character,
            final_character,
        }
    }
}

impl Default for DnRules {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    mode: EncodingMode,
    safe_list: SafeList,
    dn_rules: DnRules,
}

impl Encoder {
    /// Builds a fresh encoder with the stock table for `mode`.
    ///
    /// Prefer [`Encoder::filter`] and [`Encoder::distinguished_name`], which
    /// share one table per process.
    pub fn new(mode: EncodingMode) -> Self {
        let mut safe_list = mode.base_safe_list(BYTE_TABLE_LAST);
        mode.apply_backslash_escapes(&mut safe_list);
        tracing::debug!(
            ?mode,
            entries = safe_list.len(),
            safe = safe_list.safe_count(),
            "built safe list"
        );
        Self {
            mode,
            safe_list,
            dn_rules: DnRules::default(),
        }
    }

    /// Stock table plus every code point of the selected charts.
    ///
    /// The mode's reserved characters are escaped again after punching, so
    /// selecting Basic Latin does not open up `(` or `,`.
    pub fn with_code_charts<P: CodeChartProvider>(mode: EncodingMode, charts: &P) -> Self {
        let last = charts
            .enabled_charts()
            .map(CodeChart::last)
            .max()
            .map_or(BYTE_TABLE_LAST, |cp| (cp as usize).max(BYTE_TABLE_LAST));

        let mut safe_list = mode.base_safe_list(last);
        safe_list.punch_code_charts(charts);
        for &ch in mode.reserved() {
            safe_list.restore(u32::from(ch));
        }
        mode.apply_backslash_escapes(&mut safe_list);
        tracing::debug!(
            ?mode,
            entries = safe_list.len(),
            safe = safe_list.safe_count(),
            "built safe list with code charts"
        );
        Self {
            mode,
            safe_list,
            dn_rules: DnRules::default(),
        }
    }

    /// Process-wide filter encoder, built on first use.
    pub fn filter() -> &'static Encoder {
        static CELL: OnceCell<Encoder> = OnceCell::new();
        CELL.get_or_init(|| Encoder::new(EncodingMode::Filter))
    }

    /// Process-wide distinguished name encoder, built on first use.
    pub fn distinguished_name() -> &'static Encoder {
        static CELL: OnceCell<Encoder> = OnceCell::new();
        CELL.get_or_init(|| Encoder::new(EncodingMode::DistinguishedName))
    }

    pub fn for_mode(mode: EncodingMode) -> &'static Encoder {
        match mode {
            EncodingMode::Filter => Self::filter(),
            EncodingMode::DistinguishedName => Self::distinguished_name(),
        }
    }

    /// Replaces the positional rules used by [`Encoder::encode`].
    pub fn with_dn_rules(mut self, rules: DnRules) -> Self {
        self.dn_rules = rules;
        self
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn safe_list(&self) -> &SafeList {
        &self.safe_list
    }

    pub fn dn_rules(&self) -> DnRules {
        self.dn_rules
    }

    /// Encodes with this encoder's own positional rules.
    ///
    /// The result borrows `input` when nothing had to be escaped.
    pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.encode_with(input, self.dn_rules)
    }

    /// Encodes with the given positional rules. Filter mode has no
    /// positional rules and ignores `rules`.
    pub fn encode_with<'a>(&self, input: &'a str, rules: DnRules) -> Cow<'a, str> {
        let rules = match self.mode {
            EncodingMode::Filter => DnRules::NONE,
            EncodingMode::DistinguishedName => rules,
        };
        escape(&self.safe_list, input, rules)
    }
}

fn escape<'a>(list: &SafeList, input: &'a str, rules: DnRules) -> Cow<'a, str> {
    let bytes = input.as_bytes();
    let Some(last) = bytes.len().checked_sub(1) else {
        return Cow::Borrowed(input);
    };

    // Output is only allocated at the first escape; `copied` marks how much
    // of the input has been moved into it.
    let mut out = String::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii() {
            let escaped = match b {
                b' ' if i == 0 && rules.initial_character => Some(Cow::Borrowed("\\ ")),
                b'#' if i == 0 && rules.initial_character => Some(Cow::Borrowed("\\#")),
                b' ' if i == last && rules.final_character => Some(Cow::Borrowed("\\ ")),
                _ => list.lookup(u32::from(b)),
            };
            if let Some(seq) = escaped {
                if out.capacity() == 0 {
                    out.reserve(bytes.len() * 3);
                }
                out.push_str(&input[copied..i]);
                out.push_str(&seq);
                copied = i + 1;
            }
            i += 1;
            continue;
        }

        // Multi-byte character: either the code point is safe as a whole or
        // each of its bytes is escaped on its own.
        let Some(ch) = input[i..].chars().next() else {
            break;
        };
        let width = ch.len_utf8();
        if !list.is_safe(u32::from(ch)) {
            if out.capacity() == 0 {
                out.reserve(bytes.len() * 3);
            }
            out.push_str(&input[copied..i]);
            for &byte in &bytes[i..i + width] {
                out.push_str(&list.byte_escape(byte));
            }
            copied = i + width;
        }
        i += width;
    }

    if copied == 0 {
        return Cow::Borrowed(input);
    }
    out.push_str(&input[copied..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_charts::{LowerCodeCharts, SafeRangeSelector};

    fn printable_except(reserved: &[char]) -> Vec<u32> {
        (0x20..=0x7E)
            .filter(|v| !reserved.iter().any(|&c| u32::from(c) == *v))
            .collect()
    }

    #[test]
    fn filter_table_is_printable_ascii_minus_reserved() {
        let encoder = Encoder::new(EncodingMode::Filter);
        let safe: Vec<u32> = encoder.safe_list().safe_values().collect();
        assert_eq!(safe, printable_except(&['(', ')', '*', '/', '\\']));
        assert_eq!(encoder.safe_list().len(), 256);
    }

    #[test]
    fn dn_table_is_printable_ascii_minus_reserved() {
        let encoder = Encoder::new(EncodingMode::DistinguishedName);
        let safe: Vec<u32> = encoder.safe_list().safe_values().collect();
        assert_eq!(
            safe,
            printable_except(&[',', '+', '"', '\\', '<', '>', '&', '!', '|', '=', '-', '\'', ';'])
        );
        // `#` is only special in the first position.
        assert!(encoder.safe_list().is_safe(u32::from('#')));
    }

    #[test]
    fn dn_backslash_escapes_override_hex() {
        let list = Encoder::new(EncodingMode::DistinguishedName).safe_list().clone();
        for ch in [',', '+', '"', '\\', '<', '>', ';'] {
            assert_eq!(
                list.lookup(u32::from(ch)).as_deref(),
                Some(format!("\\{ch}").as_str())
            );
        }
        for ch in ['&', '!', '|', '=', '-', '\''] {
            assert_eq!(
                list.lookup(u32::from(ch)).as_deref(),
                Some(safe_list::hash_then_hex(u32::from(ch)).as_str())
            );
        }
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(
            Encoder::new(EncodingMode::Filter),
            Encoder::new(EncodingMode::Filter)
        );
        assert_eq!(
            Encoder::new(EncodingMode::DistinguishedName),
            Encoder::new(EncodingMode::DistinguishedName)
        );
        assert_eq!(Encoder::filter(), &Encoder::new(EncodingMode::Filter));
    }

    #[test]
    fn shared_encoders_are_built_once() {
        assert!(std::ptr::eq(Encoder::filter(), Encoder::filter()));
        assert!(std::ptr::eq(
            Encoder::distinguished_name(),
            Encoder::for_mode(EncodingMode::DistinguishedName)
        ));
    }

    #[test]
    fn nothing_to_escape_borrows() {
        let out = Encoder::filter().encode("plain value");
        assert!(matches!(out, Cow::Borrowed("plain value")));
        assert!(matches!(Encoder::filter().encode(""), Cow::Borrowed("")));
    }

    #[test]
    fn filter_mode_ignores_positional_rules() {
        let encoder = Encoder::filter();
        assert_eq!(encoder.encode_with(" #x ", DnRules::ALL), " #x ");
    }

    #[test]
    fn dn_rules_on_the_encoder_apply_to_encode() {
        let encoder = Encoder::new(EncodingMode::DistinguishedName).with_dn_rules(DnRules::NONE);
        assert_eq!(encoder.encode(" #x "), " #x ");
        assert_eq!(encoder.dn_rules(), DnRules::NONE);
        assert_eq!(Encoder::distinguished_name().encode(" #x "), "\\ #x\\ ");
    }

    #[test]
    fn code_charts_let_letters_through() {
        let charts = SafeRangeSelector::from(LowerCodeCharts::BASIC_LATIN | LowerCodeCharts::CYRILLIC);
        let encoder = Encoder::with_code_charts(EncodingMode::Filter, &charts);
        assert_eq!(encoder.safe_list().len(), 0x500);
        assert_eq!(encoder.encode("Жук (beetle)"), "Жук \\28beetle\\29");
        // Latin-1 was not selected, so é is still escaped byte by byte.
        assert_eq!(encoder.encode("é"), "\\c3\\a9");
    }

    #[test]
    fn code_charts_never_open_reserved_characters() {
        let charts = SafeRangeSelector::from(LowerCodeCharts::BASIC_LATIN);
        let filter = Encoder::with_code_charts(EncodingMode::Filter, &charts);
        assert_eq!(filter, Encoder::new(EncodingMode::Filter));

        let dn = Encoder::with_code_charts(EncodingMode::DistinguishedName, &charts);
        assert_eq!(dn, Encoder::new(EncodingMode::DistinguishedName));
    }

    #[test]
    fn punched_latin1_still_escapes_raw_bytes() {
        let charts = SafeRangeSelector::from(LowerCodeCharts::C1_CONTROLS_AND_LATIN1_SUPPLEMENT);
        let encoder = Encoder::with_code_charts(EncodingMode::DistinguishedName, &charts);
        // U+00E9 is safe as a code point; U+010D is not, and its lead byte
        // 0xC4 is escaped by value even though the U+00C4 slot is punched.
        assert_eq!(encoder.encode("é"), "é");
        assert_eq!(encoder.encode("č"), "#C4#8D");
    }
}
