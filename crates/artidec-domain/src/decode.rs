use crate::model::ReferenceTable;
use crate::shape;
use artidec_types::{ArticleCode, DecodedArticle, Parameter};

/// Hard decoder failure: an internal fault during field extraction.
///
/// Distinct from the soft-fail paths (bad shape, lookup miss), which are
/// encoded in the returned record. For a shape-valid code these variants
/// should be unreachable; they are surfaced instead of returning a
/// misleading partially populated record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("article {article:?}: group {group} missing after shape check")]
    MissingGroup { article: String, group: usize },

    #[error("article {article:?}: symbol for {parameter:?} out of range")]
    FieldExtraction {
        article: String,
        parameter: Parameter,
    },
}

/// Decode an article code against the reference table.
///
/// Always returns a record for malformed input: a code that fails the shape
/// check yields the default record (echoed code, fixed family label, all
/// parameter fields empty). Symbols that do not resolve leave their one
/// field empty without affecting sibling fields. Only internal extraction
/// faults return `Err`.
pub fn decode(
    article: &ArticleCode,
    table: &ReferenceTable,
) -> Result<DecodedArticle, DecodeError> {
    let mut record = DecodedArticle::empty(article);

    if !shape::validate_article_format(article.as_str()) {
        return Ok(record);
    }

    // Shape-checked: PREFIX-GCTT-EEE-HXX. G=grit, C=diamond %, TT=thickness,
    // EEE=exposure, H=hardness, XX reserved and never decoded.
    let groups: Vec<&str> = article.as_str().split('-').collect();
    let symbol_block = group(&groups, 1, article)?;
    let exposure = group(&groups, 2, article)?;
    let hardness_block = group(&groups, 3, article)?;

    let symbols = [
        (Parameter::GritSize, char_span(symbol_block, 0, 1)),
        (Parameter::DiamondPercent, char_span(symbol_block, 1, 1)),
        (Parameter::BladeThickness, char_span(symbol_block, 2, 2)),
        (Parameter::BladeExposure, Some(exposure.to_string())),
        (Parameter::BondHardness, char_span(hardness_block, 0, 1)),
    ];

    for (parameter, symbol) in symbols {
        let symbol = symbol.ok_or_else(|| DecodeError::FieldExtraction {
            article: article.as_str().to_string(),
            parameter,
        })?;
        if let Some(value) = table.lookup(parameter, &symbol) {
            record.set_field(parameter, value.to_string());
        }
    }

    Ok(record)
}

/// Infallible caller convenience: on a hard decoder failure, return the
/// all-`Unknown` record instead of propagating the error.
pub fn article_info(article: &ArticleCode, table: &ReferenceTable) -> DecodedArticle {
    decode(article, table).unwrap_or_else(|_| DecodedArticle::unknown(article))
}

fn group<'a>(
    groups: &[&'a str],
    index: usize,
    article: &ArticleCode,
) -> Result<&'a str, DecodeError> {
    groups.get(index).copied().ok_or_else(|| DecodeError::MissingGroup {
        article: article.as_str().to_string(),
        group: index,
    })
}

/// A sub-field of `len` characters starting at char offset `start`.
/// `None` when the group is too short to supply it.
fn char_span(group: &str, start: usize, len: usize) -> Option<String> {
    let span: String = group.chars().skip(start).take(len).collect();
    (span.chars().count() == len).then_some(span)
}
