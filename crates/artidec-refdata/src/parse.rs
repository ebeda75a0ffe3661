use crate::LoadError;
use artidec_domain::model::{ReferenceEntry, ReferenceTable};

/// Column offsets are a contract of the legend file, not inferred at
/// runtime: 0 = category label, 1 = symbol, 2 = value, 3 = unit (optional).
const COL_CATEGORY: usize = 0;
const COL_SYMBOL: usize = 1;
const COL_VALUE: usize = 2;
const COL_UNIT: usize = 3;

/// Parse legend text into a reference table.
///
/// A leading byte-order mark is stripped before parsing. Entries keep their
/// source order; duplicate `(category, symbol)` pairs are preserved as-is and
/// resolved first-wins at lookup time. Values are not trimmed.
pub fn parse_legend(text: &str) -> Result<ReferenceTable, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header is row 1; data rows are reported 2-based like a spreadsheet.
        let row = index + 2;

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() <= COL_VALUE {
            return Err(LoadError::ShortRow {
                row,
                got: record.len(),
            });
        }

        let unit = record
            .get(COL_UNIT)
            .filter(|u| !u.is_empty())
            .map(|u| u.to_string());

        entries.push(ReferenceEntry {
            category: record[COL_CATEGORY].to_string(),
            symbol: record[COL_SYMBOL].to_string(),
            value: record[COL_VALUE].to_string(),
            unit,
        });
    }

    Ok(ReferenceTable::new(entries))
}
