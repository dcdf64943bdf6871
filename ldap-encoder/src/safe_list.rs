//! Per-value escape tables.
//!
//! A [`SafeList`] starts out with every slot escaped by its generator. Holes
//! are then punched for the values allowed through verbatim, and a few slots
//! may be overwritten with a fixed escape. Once an encoder has finished
//! building its list the table is only ever read.
//!
//! Slots `0..=0x7F` stand for both the ASCII byte and the code point. Above
//! that a slot stands for a code point; raw UTF-8 bytes in `0x80..=0xFF` are
//! escaped through [`SafeList::byte_escape`], which falls back to the
//! generator if that slot has been punched as a code point.

use std::borrow::Cow;
use std::fmt;

use code_charts::CodeChartProvider;

/// Produces the escape sequence for a byte or code point value.
pub type EscapeGenerator = fn(u32) -> String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Safe: emit the input unchanged.
    Verbatim,
    /// Emit this sequence instead of the input.
    Escape(Box<str>),
}

impl Entry {
    pub fn is_verbatim(&self) -> bool {
        matches!(self, Entry::Verbatim)
    }

    pub fn sequence(&self) -> Option<&str> {
        match self {
            Entry::Verbatim => None,
            Entry::Escape(seq) => Some(seq),
        }
    }
}

/// `\` followed by two lowercase hex digits (`\2a`).
pub fn slash_then_hex(value: u32) -> String {
    format!("\\{value:02x}")
}

/// `#` followed by two uppercase hex digits (`#2A`).
pub fn hash_then_hex(value: u32) -> String {
    format!("#{value:02X}")
}

/// `#` followed by the decimal value (`#42`).
pub fn hash_then_value(value: u32) -> String {
    format!("#{value}")
}

/// `%` followed by two lowercase hex digits (`%2a`).
pub fn percent_then_hex(value: u32) -> String {
    format!("%{value:02x}")
}

#[derive(Clone)]
pub struct SafeList {
    entries: Vec<Entry>,
    generator: EscapeGenerator,
}

impl SafeList {
    /// Table with `last + 1` slots, slot `i` holding `generator(i)`.
    pub fn generate(last: usize, generator: EscapeGenerator) -> Self {
        let entries = (0..=last)
            .map(|value| Entry::Escape(generator(value as u32).into_boxed_str()))
            .collect();
        Self { entries, generator }
    }

    /// Marks every given value safe. Repeats and empty input are fine.
    ///
    /// # Panics
    ///
    /// If a value lies past the end of the table. Callers size the table to
    /// cover what they punch.
    pub fn punch<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = u32>,
    {
        for value in values {
            let slot = self.slot_mut(value);
            *slot = Entry::Verbatim;
        }
    }

    /// Punches every safe code point of every chart the provider has enabled.
    pub fn punch_code_charts<P: CodeChartProvider>(&mut self, charts: &P) {
        for chart in charts.enabled_charts() {
            tracing::trace!(chart = chart.key(), points = chart.len(), "punching code chart");
            self.punch(chart.code_points());
        }
    }

    /// Overwrites `ch`'s slot with a fixed sequence, whatever it held before.
    ///
    /// # Panics
    ///
    /// If `ch` lies past the end of the table.
    pub fn escape_character(&mut self, ch: char, sequence: &str) {
        let slot = self.slot_mut(u32::from(ch));
        *slot = Entry::Escape(sequence.into());
    }

    /// Puts the generator's escape back into `value`'s slot.
    ///
    /// # Panics
    ///
    /// If `value` lies past the end of the table.
    pub fn restore(&mut self, value: u32) {
        let sequence = (self.generator)(value).into_boxed_str();
        let slot = self.slot_mut(value);
        *slot = Entry::Escape(sequence);
    }

    pub fn entry(&self, value: u32) -> Option<&Entry> {
        self.entries.get(value as usize)
    }

    /// Escape sequence for `value`, or `None` when it passes through.
    /// Values past the end of the table are never safe.
    pub fn lookup(&self, value: u32) -> Option<Cow<'_, str>> {
        match self.entries.get(value as usize) {
            Some(Entry::Verbatim) => None,
            Some(Entry::Escape(seq)) => Some(Cow::Borrowed(seq)),
            None => Some(Cow::Owned((self.generator)(value))),
        }
    }

    pub fn is_safe(&self, value: u32) -> bool {
        self.entry(value).is_some_and(Entry::is_verbatim)
    }

    /// Escape for one raw byte of a UTF-8 sequence.
    pub fn byte_escape(&self, byte: u8) -> Cow<'_, str> {
        match self.entry(u32::from(byte)) {
            Some(Entry::Escape(seq)) => Cow::Borrowed(seq),
            _ => Cow::Owned((self.generator)(u32::from(byte))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn safe_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_verbatim()).count()
    }

    /// Values currently marked safe, ascending.
    pub fn safe_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_verbatim())
            .map(|(value, _)| value as u32)
    }

    fn slot_mut(&mut self, value: u32) -> &mut Entry {
        let len = self.entries.len();
        assert!(
            (value as usize) < len,
            "value {value:#x} is outside a safe list of {len} entries"
        );
        &mut self.entries[value as usize]
    }
}

impl PartialEq for SafeList {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for SafeList {}

impl fmt::Debug for SafeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeList")
            .field("len", &self.len())
            .field("safe", &self.safe_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_charts::{LowerCodeCharts, SafeRangeSelector};

    #[test]
    fn generators_format_two_digits() {
        assert_eq!(slash_then_hex(0x2a), "\\2a");
        assert_eq!(slash_then_hex(0), "\\00");
        assert_eq!(hash_then_hex(0x2a), "#2A");
        assert_eq!(hash_then_hex(0x7f), "#7F");
        assert_eq!(hash_then_value(42), "#42");
        assert_eq!(percent_then_hex(0xc4), "%c4");
    }

    #[test]
    fn generate_fills_every_slot() {
        let list = SafeList::generate(255, slash_then_hex);
        assert_eq!(list.len(), 256);
        assert_eq!(list.safe_count(), 0);
        for value in 0..=255u32 {
            assert_eq!(
                list.entry(value).and_then(Entry::sequence),
                Some(slash_then_hex(value).as_str())
            );
        }
        assert!(list.entry(256).is_none());
    }

    #[test]
    fn generate_zero_has_one_slot() {
        let list = SafeList::generate(0, hash_then_hex);
        assert_eq!(list.len(), 1);
        assert_eq!(list.lookup(0).as_deref(), Some("#00"));
    }

    #[test]
    fn punch_marks_values_safe() {
        let mut list = SafeList::generate(255, slash_then_hex);
        list.punch([b'a', b'b', b'a'].map(u32::from));
        assert!(list.is_safe(u32::from(b'a')));
        assert!(list.is_safe(u32::from(b'b')));
        assert!(!list.is_safe(u32::from(b'c')));
        assert_eq!(list.safe_count(), 2);
        assert_eq!(list.lookup(u32::from(b'a')), None);
    }

    #[test]
    fn punch_nothing_is_a_no_op() {
        let mut list = SafeList::generate(255, slash_then_hex);
        let before = list.clone();
        list.punch(std::iter::empty());
        assert_eq!(list, before);
    }

    #[test]
    #[should_panic(expected = "outside a safe list")]
    fn punch_past_the_end_panics() {
        let mut list = SafeList::generate(255, slash_then_hex);
        list.punch([0x100]);
    }

    #[test]
    fn escape_character_overrides_any_state() {
        let mut list = SafeList::generate(255, hash_then_hex);
        list.escape_character(',', "\\,");
        assert_eq!(list.lookup(u32::from(',')).as_deref(), Some("\\,"));

        list.punch([u32::from('a')]);
        list.escape_character('a', "\\a");
        assert_eq!(list.lookup(u32::from('a')).as_deref(), Some("\\a"));
    }

    #[test]
    fn restore_brings_back_the_generated_escape() {
        let mut list = SafeList::generate(255, hash_then_hex);
        list.punch([u32::from('=')]);
        list.restore(u32::from('='));
        assert_eq!(list.lookup(u32::from('=')).as_deref(), Some("#3D"));
    }

    #[test]
    fn lookup_past_the_end_is_escaped() {
        let list = SafeList::generate(255, slash_then_hex);
        assert_eq!(list.lookup(0x1234).as_deref(), Some("\\1234"));
        assert!(!list.is_safe(0x1234));
    }

    #[test]
    fn byte_escape_ignores_punched_code_points() {
        let mut list = SafeList::generate(255, slash_then_hex);
        list.punch([0xC4]);
        assert!(list.is_safe(0xC4));
        assert_eq!(list.byte_escape(0xC4), "\\c4");
        assert_eq!(list.byte_escape(0x8D), "\\8d");
    }

    #[test]
    fn code_charts_punch_into_a_wide_table() {
        let mut list = SafeList::generate(0x4FF, slash_then_hex);
        list.punch_code_charts(&SafeRangeSelector::from(LowerCodeCharts::CYRILLIC));
        assert_eq!(list.safe_count(), 256);
        assert!(list.is_safe(0x416));
        assert!(!list.is_safe(u32::from('A')));
    }

    #[test]
    fn punching_charts_twice_changes_nothing() {
        let charts = LowerCodeCharts::GREEK_AND_COPTIC | LowerCodeCharts::CYRILLIC;
        let mut once = SafeList::generate(0x4FF, slash_then_hex);
        once.punch_code_charts(&charts);
        let mut twice = once.clone();
        twice.punch_code_charts(&charts);
        assert_eq!(once, twice);
    }

    #[test]
    fn safe_values_are_ascending() {
        let mut list = SafeList::generate(255, slash_then_hex);
        list.punch([0x7A, 0x41, 0x30]);
        assert_eq!(list.safe_values().collect::<Vec<_>>(), [0x30, 0x41, 0x7A]);
    }

    #[test]
    fn debug_is_a_summary() {
        let list = SafeList::generate(255, slash_then_hex);
        assert_eq!(format!("{list:?}"), "SafeList { len: 256, safe: 0 }");
    }
}
