/// Declares one super-range of code charts: a flag type with one bit per
/// block, the static chart table behind it, parsing by key and the
/// [`crate::CodeChartProvider`] impl.
macro_rules! code_chart_group {
    (
        $(#[$meta:meta])*
        pub struct $group:ident($label:literal) {
            $(
                $flag:ident = $bit:literal, $key:ident, $name:literal => [
                    $($lo:literal ..= $hi:literal),+ $(,)?
                ];
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $group(u64);

        impl $group {
            pub const NONE: Self = Self(0);
            $( pub const $flag: Self = Self($bit); )+

            const CHARTS: &'static [(Self, $crate::CodeChart)] = &[
                $(
                    (
                        Self::$flag,
                        $crate::CodeChart {
                            key: stringify!($key),
                            name: $name,
                            ranges: &[$($lo..=$hi),+],
                        },
                    ),
                )+
            ];

            /// Every chart in this group.
            pub fn all() -> Self {
                Self::CHARTS.iter().fold(Self::NONE, |acc, (flag, _)| acc | *flag)
            }

            pub const fn bits(self) -> u64 {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// True when any bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// All charts of the group, selected or not, in code point order.
            pub fn charts() -> impl Iterator<Item = &'static $crate::CodeChart> {
                Self::CHARTS.iter().map(|(_, chart)| chart)
            }
        }

        impl ::std::ops::BitOr for $group {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $group {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::str::FromStr for $group {
            type Err = $crate::UnknownCodeChart;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::CHARTS
                    .iter()
                    .find(|(_, chart)| chart.matches_key(s))
                    .map(|(flag, _)| *flag)
                    .ok_or_else(|| $crate::UnknownCodeChart {
                        group: $label,
                        name: s.to_string(),
                    })
            }
        }

        impl $crate::CodeChartProvider for $group {
            fn enabled_charts(&self) -> impl Iterator<Item = &'static $crate::CodeChart> {
                let selected = *self;
                Self::CHARTS
                    .iter()
                    .filter(move |(flag, _)| selected.contains(*flag))
                    .map(|(_, chart)| chart)
            }
        }
    };
}
