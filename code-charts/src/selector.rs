use crate::{
    CodeChart, CodeChartProvider, LowerCodeCharts, LowerMidCodeCharts, MidCodeCharts,
    UpperCodeCharts, UpperMidCodeCharts,
};

/// Chart selection across all five super-ranges.
///
/// Splitting the catalog into five groups keeps each flag set inside 64 bits
/// and lets a caller who only needs, say, Cyrillic avoid touching the CJK
/// data at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SafeRangeSelector {
    pub lower: LowerCodeCharts,
    pub lower_mid: LowerMidCodeCharts,
    pub mid: MidCodeCharts,
    pub upper_mid: UpperMidCodeCharts,
    pub upper: UpperCodeCharts,
}

impl SafeRangeSelector {
    pub const NONE: Self = Self {
        lower: LowerCodeCharts::NONE,
        lower_mid: LowerMidCodeCharts::NONE,
        mid: MidCodeCharts::NONE,
        upper_mid: UpperMidCodeCharts::NONE,
        upper: UpperCodeCharts::NONE,
    };

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
            && self.lower_mid.is_empty()
            && self.mid.is_empty()
            && self.upper_mid.is_empty()
            && self.upper.is_empty()
    }

    /// Highest safe code point of any selected chart; `None` when nothing is selected.
    pub fn max_code_point(&self) -> Option<u32> {
        self.enabled_charts().map(CodeChart::last).max()
    }
}

impl CodeChartProvider for SafeRangeSelector {
    fn enabled_charts(&self) -> impl Iterator<Item = &'static CodeChart> {
        self.lower
            .enabled_charts()
            .chain(self.lower_mid.enabled_charts())
            .chain(self.mid.enabled_charts())
            .chain(self.upper_mid.enabled_charts())
            .chain(self.upper.enabled_charts())
    }
}

macro_rules! selector_from_group {
    ($($group:ident => $field:ident),+ $(,)?) => {
        $(
            impl From<$group> for SafeRangeSelector {
                fn from(charts: $group) -> Self {
                    Self {
                        $field: charts,
                        ..Self::NONE
                    }
                }
            }
        )+
    };
}

selector_from_group! {
    LowerCodeCharts => lower,
    LowerMidCodeCharts => lower_mid,
    MidCodeCharts => mid,
    UpperMidCodeCharts => upper_mid,
    UpperCodeCharts => upper,
}
