//! Unicode code chart catalog for safe-list construction.
//!
//! Each block of the Basic Multilingual Plane that an encoder may choose to
//! pass through unescaped is described once, as the set of code points in the
//! block minus its reserved and unassigned positions. Blocks are grouped into
//! five super-ranges (lower, lower-mid, mid, upper-mid, upper) with one flag
//! type per group; [`SafeRangeSelector`] combines all five.
//!
//! This crate is data only: it never decides what is safe for a given
//! syntax. Encoders punch the selected charts into their own tables.

#[macro_use]
mod macros;

pub mod chart;
pub mod lower;
pub mod lower_mid;
pub mod mid;
pub mod selector;
pub mod upper;
pub mod upper_mid;

pub use chart::{CodeChart, CodeChartProvider, UnknownCodeChart};
pub use lower::LowerCodeCharts;
pub use lower_mid::LowerMidCodeCharts;
pub use mid::MidCodeCharts;
pub use selector::SafeRangeSelector;
pub use upper::UpperCodeCharts;
pub use upper_mid::UpperMidCodeCharts;

/// Every chart in the catalog, lower range first.
pub fn all_charts() -> impl Iterator<Item = &'static CodeChart> {
    LowerCodeCharts::charts()
        .chain(LowerMidCodeCharts::charts())
        .chain(MidCodeCharts::charts())
        .chain(UpperMidCodeCharts::charts())
        .chain(UpperCodeCharts::charts())
}
