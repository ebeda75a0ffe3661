use crate::params::{Parameter, PRODUCT_FAMILY_HUB_BLADE, UNKNOWN_MARKER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque article identifier as supplied by the caller.
///
/// Construction never validates: malformed input is still an `ArticleCode`,
/// it just decodes to the default record. Shape checking lives in the
/// domain crate.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ArticleCode(String);

impl ArticleCode {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleCode {
    fn from(value: &str) -> Self {
        ArticleCode::new(value)
    }
}

impl From<String> for ArticleCode {
    fn from(value: String) -> Self {
        ArticleCode(value)
    }
}

/// The decoder's output record.
///
/// Parameter fields hold the display value resolved from the legend, an empty
/// string when the symbol did not resolve (or the shape check soft-failed),
/// or the literal `Unknown` in every field when the decoder itself failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecodedArticle {
    /// Echo of the input code, valid or not.
    pub article: String,
    pub product_family: String,
    pub grit_size: String,
    pub diamond_percent: String,
    pub blade_thickness: String,
    pub blade_exposure: String,
    pub bond_hardness: String,
}

impl DecodedArticle {
    /// Default record: echoed code, fixed family label, all parameters empty.
    pub fn empty(article: &ArticleCode) -> Self {
        Self {
            article: article.as_str().to_string(),
            product_family: PRODUCT_FAMILY_HUB_BLADE.to_string(),
            grit_size: String::new(),
            diamond_percent: String::new(),
            blade_thickness: String::new(),
            blade_exposure: String::new(),
            bond_hardness: String::new(),
        }
    }

    /// Total-failure record: every field except the echo is `Unknown`.
    pub fn unknown(article: &ArticleCode) -> Self {
        Self {
            article: article.as_str().to_string(),
            product_family: UNKNOWN_MARKER.to_string(),
            grit_size: UNKNOWN_MARKER.to_string(),
            diamond_percent: UNKNOWN_MARKER.to_string(),
            blade_thickness: UNKNOWN_MARKER.to_string(),
            blade_exposure: UNKNOWN_MARKER.to_string(),
            bond_hardness: UNKNOWN_MARKER.to_string(),
        }
    }

    pub fn field(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::GritSize => &self.grit_size,
            Parameter::DiamondPercent => &self.diamond_percent,
            Parameter::BladeThickness => &self.blade_thickness,
            Parameter::BladeExposure => &self.blade_exposure,
            Parameter::BondHardness => &self.bond_hardness,
        }
    }

    pub fn set_field(&mut self, parameter: Parameter, value: String) {
        match parameter {
            Parameter::GritSize => self.grit_size = value,
            Parameter::DiamondPercent => self.diamond_percent = value,
            Parameter::BladeThickness => self.blade_thickness = value,
            Parameter::BladeExposure => self.blade_exposure = value,
            Parameter::BondHardness => self.bond_hardness = value,
        }
    }

    /// True when every parameter field resolved to a non-empty value.
    pub fn fully_resolved(&self) -> bool {
        Parameter::ALL.iter().all(|p| !self.field(*p).is_empty())
    }
}
