//! Batch command - assess a file of inputs and show the session history

use crate::cmd::{format_ngn, read_records};
use crate::history::History;
use crate::tax::{assess, TaxInput};
use clap::Args;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// Input file (CSV or JSON). Reads from stdin with "-".
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Output the history CSV instead of a formatted table
    #[arg(long)]
    csv: bool,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

/// Row for the history table output
#[derive(Debug, Clone, Tabled)]
pub struct HistoryRow {
    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "State")]
    pub state: String,

    #[tabled(rename = "Type")]
    pub category: String,

    #[tabled(rename = "Income")]
    pub income: String,

    #[tabled(rename = "Annual Tax")]
    pub annual_tax: String,

    #[tabled(rename = "Monthly Tax")]
    pub monthly_tax: String,

    #[tabled(rename = "VAT")]
    pub vat: String,

    #[tabled(rename = "WHT")]
    pub withholding_tax: String,

    #[tabled(rename = "CGT")]
    pub capital_gains_tax: String,

    #[tabled(rename = "Net Pay")]
    pub net_pay: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_records(&self.input)?;

        let mut history = History::new();
        for record in &records {
            let input = TaxInput::try_from(record)?;
            history.push(assess(&input)?);
        }

        if self.csv {
            history.write_csv(io::stdout())
        } else if self.json {
            let entries: Vec<_> = history.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        } else {
            self.print_table(&history);
            Ok(())
        }
    }

    fn print_table(&self, history: &History) {
        if history.is_empty() {
            println!("No assessments computed");
            return;
        }

        let rows: Vec<HistoryRow> = history
            .iter()
            .map(|a| HistoryRow {
                date: a.computed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                state: a.state.code().to_string(),
                category: a.category.code().to_string(),
                income: format_ngn(a.income),
                annual_tax: format_ngn(a.annual_tax),
                monthly_tax: format_ngn(a.monthly_tax),
                vat: format_ngn(a.vat),
                withholding_tax: format_ngn(a.withholding_tax),
                capital_gains_tax: format_ngn(a.capital_gains_tax),
                net_pay: a.net_pay.map(format_ngn).unwrap_or_default(),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}
