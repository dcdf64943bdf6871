use anyhow::{Context, Result};
use code_charts::{
    LowerCodeCharts, LowerMidCodeCharts, MidCodeCharts, SafeRangeSelector, UnknownCodeChart,
    UpperCodeCharts, UpperMidCodeCharts,
};
use serde::Deserialize;
use std::fs;
use std::ops::BitOr;
use std::path::Path;
use std::str::FromStr;

use crate::encoder::{DnRules, Encoder, EncodingMode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EncoderConfig {
    #[serde(default)]
    pub distinguished_name: DistinguishedNameConfig,
    #[serde(default)]
    pub code_charts: CodeChartsConfig,
}

impl EncoderConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(
                "No config file found at {}. Using EncoderConfig::default().",
                path.display()
            );
            return Ok(EncoderConfig::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str::<EncoderConfig>(text)?)
    }

    /// Builds an encoder for `mode` from this configuration.
    ///
    /// Without any chart selected the shared table is reused; otherwise a
    /// wider table is built with the charts punched in.
    pub fn build(&self, mode: EncodingMode) -> Result<Encoder> {
        let selector = self
            .code_charts
            .selector()
            .context("resolving [code_charts]")?;
        let encoder = if selector.is_empty() {
            Encoder::for_mode(mode).clone()
        } else {
            tracing::debug!(?mode, ?selector, "applying configured code charts");
            Encoder::with_code_charts(mode, &selector)
        };
        Ok(encoder.with_dn_rules(self.distinguished_name.rules()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistinguishedNameConfig {
    #[serde(default = "DistinguishedNameConfig::default_initial_character_rules")]
    pub initial_character_rules: bool,
    #[serde(default = "DistinguishedNameConfig::default_final_character_rule")]
    pub final_character_rule: bool,
}

impl DistinguishedNameConfig {
    fn default_initial_character_rules() -> bool {
        true
    }

    fn default_final_character_rule() -> bool {
        true
    }

    pub fn rules(&self) -> DnRules {
        DnRules::new(self.initial_character_rules, self.final_character_rule)
    }
}

impl Default for DistinguishedNameConfig {
    fn default() -> Self {
        Self {
            initial_character_rules: Self::default_initial_character_rules(),
            final_character_rule: Self::default_final_character_rule(),
        }
    }
}

/// Chart names per group, matched loosely against keys and display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeChartsConfig {
    #[serde(default)]
    pub lower: Vec<String>,
    #[serde(default)]
    pub lower_mid: Vec<String>,
    #[serde(default)]
    pub mid: Vec<String>,
    #[serde(default)]
    pub upper_mid: Vec<String>,
    #[serde(default)]
    pub upper: Vec<String>,
}

impl CodeChartsConfig {
    pub fn selector(&self) -> Result<SafeRangeSelector, UnknownCodeChart> {
        Ok(SafeRangeSelector {
            lower: parse_group::<LowerCodeCharts>(&self.lower)?,
            lower_mid: parse_group::<LowerMidCodeCharts>(&self.lower_mid)?,
            mid: parse_group::<MidCodeCharts>(&self.mid)?,
            upper_mid: parse_group::<UpperMidCodeCharts>(&self.upper_mid)?,
            upper: parse_group::<UpperCodeCharts>(&self.upper)?,
        })
    }
}

fn parse_group<T>(names: &[String]) -> Result<T, UnknownCodeChart>
where
    T: FromStr<Err = UnknownCodeChart> + BitOr<Output = T> + Default,
{
    names
        .iter()
        .try_fold(T::default(), |acc, name| Ok(acc | name.parse::<T>()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = EncoderConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, EncoderConfig::default());
        assert_eq!(cfg.distinguished_name.rules(), DnRules::ALL);
        assert!(cfg.code_charts.selector().unwrap().is_empty());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let cfg = EncoderConfig::from_toml_str(
            "[distinguished_name]\nfinal_character_rule = false\n",
        )
        .unwrap();
        assert!(cfg.distinguished_name.initial_character_rules);
        assert!(!cfg.distinguished_name.final_character_rule);
    }

    #[test]
    fn chart_names_build_a_selector() {
        let cfg = EncoderConfig::from_toml_str(
            r#"
            [code_charts]
            lower = ["BasicLatin", "cyrillic"]
            upper_mid = ["Hiragana"]
            "#,
        )
        .unwrap();
        let selector = cfg.code_charts.selector().unwrap();
        assert_eq!(
            selector.lower,
            LowerCodeCharts::BASIC_LATIN | LowerCodeCharts::CYRILLIC
        );
        assert_eq!(selector.upper_mid, UpperMidCodeCharts::HIRAGANA);
        assert!(selector.mid.is_empty());
    }

    #[test]
    fn unknown_chart_is_an_error() {
        let cfg = EncoderConfig::from_toml_str("[code_charts]\nmid = [\"Elvish\"]\n").unwrap();
        let err = cfg.code_charts.selector().unwrap_err();
        assert_eq!(err.group, "mid");
        assert!(cfg.build(EncodingMode::Filter).is_err());
    }

    #[test]
    fn wrong_types_fail_to_parse() {
        assert!(EncoderConfig::from_toml_str("[code_charts]\nlower = \"BasicLatin\"\n").is_err());
    }

    #[test]
    fn build_without_charts_matches_the_shared_table() {
        let encoder = EncoderConfig::default()
            .build(EncodingMode::DistinguishedName)
            .unwrap();
        assert_eq!(encoder, *Encoder::distinguished_name());
    }
}
