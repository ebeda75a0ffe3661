//! CLI entry point for artidec.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. Decoding semantics live in the `artidec-domain` crate.
//!
//! Exit codes: 0 success, 1 runtime error, 2 validation failure.

use anyhow::Context;
use artidec_domain::validate_article_format;
use artidec_refdata::{load_legend, ReferenceTable};
use artidec_types::{ArticleCode, DecodedArticle, Parameter};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};

const EXIT_RUNTIME_ERROR: i32 = 1;
const EXIT_INVALID: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "artidec",
    version,
    about = "Cutting-disc article code decoder"
)]
struct Cli {
    /// Path to the symbol legend CSV (semicolon-delimited, positional columns).
    #[arg(long, default_value = "refdata/symbols.csv")]
    legend: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an article code into its physical parameters.
    Decode {
        /// The article code, e.g. 00757-1130-250-100.
        article: String,

        /// Emit the record as JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// Check an article code's shape without consulting the legend.
    Validate {
        /// The article code to check.
        article: String,
    },

    /// List the loaded legend entries grouped by category.
    Legend {
        /// Emit the entries as JSON instead of grouped text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("artidec: {err:#}");
            EXIT_RUNTIME_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Commands::Decode { article, json } => cmd_decode(&cli.legend, &article, json),
        Commands::Validate { article } => Ok(cmd_validate(&article)),
        Commands::Legend { json } => cmd_legend(&cli.legend, json),
    }
}

fn cmd_decode(legend_path: &Utf8Path, article: &str, json: bool) -> anyhow::Result<i32> {
    if !validate_article_format(article) {
        eprintln!(
            "artidec: invalid article format: {article:?} (expected 00757-XXXX-XXX-XXX, 18 characters)"
        );
        return Ok(EXIT_INVALID);
    }

    let table = load_or_empty(legend_path);
    let code = ArticleCode::new(article);
    let record = artidec_domain::decode(&code, &table).context("decode article")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_record(&record));
    }
    Ok(0)
}

fn cmd_validate(article: &str) -> i32 {
    if validate_article_format(article) {
        println!("valid");
        0
    } else {
        println!("invalid");
        EXIT_INVALID
    }
}

fn cmd_legend(legend_path: &Utf8Path, json: bool) -> anyhow::Result<i32> {
    let table =
        load_legend(legend_path).with_context(|| format!("load legend {legend_path}"))?;

    if json {
        let rows: Vec<serde_json::Value> = table
            .entries()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "category": e.category,
                    "symbol": e.symbol,
                    "value": e.value,
                    "unit": e.unit,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(0);
    }

    print!("{}", render_legend(&table));
    Ok(0)
}

/// Degraded-mode table load for the decode path: a missing or malformed
/// legend leaves every field unresolved but never aborts the decode.
fn load_or_empty(legend_path: &Utf8Path) -> ReferenceTable {
    match load_legend(legend_path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("artidec: warning: legend unavailable ({err}); decoding with an empty table");
            ReferenceTable::empty()
        }
    }
}

fn render_record(record: &DecodedArticle) -> String {
    let mut out = String::new();
    let rows = [
        ("Article", record.article.as_str()),
        ("Product family", record.product_family.as_str()),
        ("Grit size", record.grit_size.as_str()),
        ("Diamond %", record.diamond_percent.as_str()),
        ("Blade thickness", record.blade_thickness.as_str()),
        ("Blade exposure", record.blade_exposure.as_str()),
        ("Bond hardness", record.bond_hardness.as_str()),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{label:<16} {value}\n"));
    }
    out
}

fn render_legend(table: &ReferenceTable) -> String {
    let mut out = String::new();
    for parameter in Parameter::ALL {
        let rows: Vec<_> = table
            .entries()
            .iter()
            .filter(|e| e.category == parameter.label())
            .collect();
        if rows.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", parameter.label()));
        for entry in rows {
            match &entry.unit {
                Some(unit) => {
                    out.push_str(&format!("  {} -> {} {}\n", entry.symbol, entry.value, unit))
                }
                None => out.push_str(&format!("  {} -> {}\n", entry.symbol, entry.value)),
            }
        }
    }
    out
}
