//! The closed set of decodable parameter categories and fixed labels.
//!
//! Legend rows are matched against these labels verbatim. The bilingual text
//! is a contract of the source data, not a localization surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed 5-character prefix shared by every decodable article.
pub const ARTICLE_PREFIX: &str = "00757";

/// Total article length in characters, hyphens included.
pub const ARTICLE_LEN: usize = 18;

/// Hyphen-delimited group lengths: prefix, symbol block, exposure, hardness block.
pub const ARTICLE_GROUP_LENS: [usize; 4] = [5, 4, 3, 3];

/// Descriptive product-family label carried by every decodable article.
pub const PRODUCT_FAMILY_HUB_BLADE: &str = "Hub blade (фланцевый/корпусной диск)";

/// Marker written into every field when the decoder itself failed.
pub const UNKNOWN_MARKER: &str = "Unknown";

/// One of the five physical attributes encoded in an article.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    GritSize,
    DiamondPercent,
    BladeThickness,
    BladeExposure,
    BondHardness,
}

impl Parameter {
    /// All categories, in the positional order they appear in the article.
    pub const ALL: [Parameter; 5] = [
        Parameter::GritSize,
        Parameter::DiamondPercent,
        Parameter::BladeThickness,
        Parameter::BladeExposure,
        Parameter::BondHardness,
    ];

    /// The exact category label used by the symbol legend.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::GritSize => "Grit Size (Размер алмазного зерна)",
            Parameter::DiamondPercent => "Diamond % (Концентрация алмазного зерна)",
            Parameter::BladeThickness => "Blade thickness (Толщина лезвия)",
            Parameter::BladeExposure => "Blade exposure (Вылет лезвия)",
            Parameter::BondHardness => "Bond hardness (Твёрдость связки)",
        }
    }
}
