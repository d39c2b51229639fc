//! Caller-owned, newest-first session history of assessments.
//!
//! The tax engine never touches this; each command owns one `History` and
//! appends the records it computes.

use crate::tax::Assessment;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Assessment>,
}

/// CSV row for history export. Fixed ten-column layout; net pay is blank for
/// company categories.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryCsvRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Type")]
    pub category: String,
    #[serde(rename = "Income")]
    pub income: String,
    #[serde(rename = "Annual Tax")]
    pub annual_tax: String,
    #[serde(rename = "Monthly Tax")]
    pub monthly_tax: String,
    #[serde(rename = "VAT")]
    pub vat: String,
    #[serde(rename = "WHT")]
    pub withholding_tax: String,
    #[serde(rename = "CGT")]
    pub capital_gains_tax: String,
    #[serde(rename = "Net Pay")]
    pub net_pay: String,
}

impl From<&Assessment> for HistoryCsvRecord {
    fn from(assessment: &Assessment) -> Self {
        HistoryCsvRecord {
            date: assessment
                .computed_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            state: assessment.state.code().to_string(),
            category: assessment.category.code().to_string(),
            income: assessment.income.to_string(),
            annual_tax: assessment.annual_tax.to_string(),
            monthly_tax: assessment.monthly_tax.to_string(),
            vat: assessment.vat.to_string(),
            withholding_tax: assessment.withholding_tax.to_string(),
            capital_gains_tax: assessment.capital_gains_tax.to_string(),
            net_pay: assessment
                .net_pay
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Prepend; the most recent assessment is always first.
    pub fn push(&mut self, assessment: Assessment) {
        self.entries.insert(0, assessment);
    }

    /// The most recently pushed assessment.
    pub fn latest(&self) -> Option<&Assessment> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assessment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the history to CSV, newest first, with the fixed header
    /// `Date,State,Type,Income,Annual Tax,Monthly Tax,VAT,WHT,CGT,Net Pay`.
    pub fn write_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for assessment in &self.entries {
            let record: HistoryCsvRecord = assessment.into();
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::{assess_at, StateCode, TaxInput, TaxpayerCategory};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn assessment(income: Decimal, category: TaxpayerCategory) -> Assessment {
        assess_at(
            &TaxInput {
                income,
                category,
                state: StateCode::Lagos,
                vat_base: None,
                withholding: None,
            },
            Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn newest_first() {
        let mut history = History::new();
        history.push(assessment(dec!(1000), TaxpayerCategory::Individual));
        history.push(assessment(dec!(2000), TaxpayerCategory::Freelancer));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().income, dec!(2000));
        let incomes: Vec<_> = history.iter().map(|a| a.income).collect();
        assert_eq!(incomes, vec![dec!(2000), dec!(1000)]);
    }

    #[test]
    fn csv_has_fixed_header() {
        let mut history = History::new();
        history.push(assessment(dec!(1000000), TaxpayerCategory::Individual));

        let mut output = Vec::new();
        history.write_csv(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,State,Type,Income,Annual Tax,Monthly Tax,VAT,WHT,CGT,Net Pay"
        );
    }

    #[test]
    fn company_net_pay_is_blank() {
        let mut history = History::new();
        history.push(assessment(dec!(10000000), TaxpayerCategory::LargeCompany));

        let mut output = Vec::new();
        history.write_csv(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(','), "expected blank net pay cell: {row}");
        assert!(row.contains("large_company"));
    }

    #[test]
    fn empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
