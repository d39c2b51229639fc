//! Bands command - show the personal income band schedule

use crate::cmd::format_ngn;
use crate::tax::BandSchedule;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BandsCommand {
    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct BandRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl BandsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schedule = BandSchedule::personal_income();

        let mut rows = Vec::new();
        let mut lower = Decimal::ZERO;
        for band in schedule.bands() {
            rows.push(BandRow {
                from: format_ngn(lower),
                to: band
                    .upper
                    .map(format_ngn)
                    .unwrap_or_else(|| "\u{221E}".to_string()),
                rate: format!("{:.0}%", band.rate * dec!(100)),
            });
            if let Some(upper) = band.upper {
                lower = upper;
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        Ok(())
    }
}
