pub mod bands;
pub mod batch;
pub mod compute;
pub mod report;
pub mod schema;

use crate::i18n::Language;
use crate::input::{self, AssessmentRecord};
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read assessment records (CSV or JSON) from a file, or stdin with "-".
pub fn read_records(path: &Path) -> anyhow::Result<Vec<AssessmentRecord>> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Vec<AssessmentRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        input::read_json(reader)
    } else {
        input::read_csv(reader)
    }
}

fn read_from_stdin() -> anyhow::Result<Vec<AssessmentRecord>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    // JSON input starts with '{'; anything else is treated as CSV
    let is_json = buffer.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{');
    let cursor = io::Cursor::new(buffer);
    if is_json {
        input::read_json(cursor)
    } else {
        input::read_csv(cursor)
    }
}

/// Shared `--lang` flag values.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LangArg {
    /// English
    #[default]
    En,
    /// Nigerian Pidgin
    Pg,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Language::En,
            LangArg::Pg => Language::Pg,
        }
    }
}

/// Format an NGN amount with thousands separators, e.g. `₦1,234,567.89`.
pub fn format_ngn(amount: Decimal) -> String {
    let text = format!("{:.2}", amount.round_dp(2));
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-\u{20A6}{grouped}.{frac_part}")
    } else {
        format!("\u{20A6}{grouped}.{frac_part}")
    }
}
