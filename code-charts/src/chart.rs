use std::fmt;
use std::ops::RangeInclusive;

/// A single Unicode block and the code points inside it that are safe to
/// pass through an encoder unescaped.
///
/// `ranges` is the block range with its reserved and unassigned positions
/// already cut out, so iteration never has to consult an exception list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeChart {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) ranges: &'static [RangeInclusive<u32>],
}

impl CodeChart {
    /// Identifier used in configuration files, e.g. `GreekAndCoptic`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Display name as printed in the Unicode code charts.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ranges(&self) -> &'static [RangeInclusive<u32>] {
        self.ranges
    }

    /// Safe code points in ascending order, without duplicates.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + 'static {
        let ranges = self.ranges;
        ranges.iter().cloned().flatten()
    }

    pub fn first(&self) -> u32 {
        self.ranges.first().map_or(0, |r| *r.start())
    }

    pub fn last(&self) -> u32 {
        self.ranges.last().map_or(0, |r| *r.end())
    }

    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|r| (*r.end() - *r.start()) as usize + 1)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(&code_point))
    }

    /// Loose key match: case, spaces, `-` and `_` are ignored, so
    /// `latin-extended-a`, `LATIN_EXTENDED_A` and `Latin Extended-A` all hit.
    pub(crate) fn matches_key(&self, candidate: &str) -> bool {
        let wanted = fold_key(candidate);
        !wanted.is_empty() && (wanted == fold_key(self.key) || wanted == fold_key(self.name))
    }
}

impl fmt::Display for CodeChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (U+{:04X}..U+{:04X})", self.name, self.first(), self.last())
    }
}

fn fold_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Something that can say which code charts are switched on.
///
/// Implemented by each chart group and by [`crate::SafeRangeSelector`]; a
/// safe list punches every code point of every chart yielded here.
pub trait CodeChartProvider {
    fn enabled_charts(&self) -> impl Iterator<Item = &'static CodeChart>;
}

/// Returned when a chart key does not name a block in the requested group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {group} code chart: {name:?}")]
pub struct UnknownCodeChart {
    pub group: &'static str,
    pub name: String,
}
