//! The fixed-width article grammar.
//!
//! ```text
//! CODE := PREFIX "-" GRIT DIAMOND THICK(2) "-" EXPOSURE(3) "-" HARDNESS CONST(2)
//! ```
//!
//! 18 characters total, hyphen-delimited group lengths 5/4/3/3. The trailing
//! `CONST(2)` characters are reserved and never decoded.

use artidec_types::{ARTICLE_GROUP_LENS, ARTICLE_LEN, ARTICLE_PREFIX};

/// Pure shape check: length, prefix, and group lengths.
///
/// Serves both as the caller-facing pre-flight gate and as `decode`'s
/// internal soft-fail check. Does not consult the reference table and does
/// not verify that any symbol resolves.
pub fn validate_article_format(article: &str) -> bool {
    if article.chars().count() != ARTICLE_LEN || !article.starts_with(ARTICLE_PREFIX) {
        return false;
    }

    let groups: Vec<&str> = article.split('-').collect();
    if groups.len() != ARTICLE_GROUP_LENS.len() {
        return false;
    }

    groups
        .iter()
        .zip(ARTICLE_GROUP_LENS)
        .all(|(group, len)| group.chars().count() == len)
}
