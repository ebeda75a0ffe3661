//! Stable DTOs and label constants used across the artidec workspace.
//!
//! This crate is intentionally boring:
//! - the article code newtype
//! - the decoded record emitted to callers
//! - the closed set of parameter categories and their legend labels

#![forbid(unsafe_code)]

pub mod article;
pub mod params;

pub use article::{ArticleCode, DecodedArticle};
pub use params::{
    Parameter, ARTICLE_GROUP_LENS, ARTICLE_LEN, ARTICLE_PREFIX, PRODUCT_FAMILY_HUB_BLADE,
    UNKNOWN_MARKER,
};
