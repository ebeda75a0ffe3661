use artidec_types::Parameter;

/// One row of the symbol legend: a category label, the literal symbol as it
/// appears embedded in an article, the resolved display value, and an
/// optional unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// Category label, expected to match one of the five `Parameter` labels
    /// verbatim. Rows with an unrecognized label are kept but never match.
    pub category: String,
    pub symbol: String,
    pub value: String,
    pub unit: Option<String>,
}

/// Immutable lookup set mapping `(category, symbol)` to a display value.
///
/// Built once by the loader (or directly by tests) and passed by reference
/// to the decoder. `(category, symbol)` is unique by contract of the source
/// file; if duplicates occur the first loaded entry wins.
#[derive(Clone, Debug, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// The degraded table used when the legend source is unavailable:
    /// structurally valid, every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive match on both category label and symbol.
    /// First match in load order wins.
    pub fn lookup(&self, parameter: Parameter, symbol: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.category == parameter.label() && e.symbol == symbol)
            .map(|e| e.value.as_str())
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
