//! Batch input records and their conversion into validated [`TaxInput`]s.

use crate::tax::{StateCode, TaxInput, TaxpayerCategory, WithholdingCategory};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use taxng_derive::CsvColumns;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown taxpayer category: {0}")]
    UnknownCategory(String),
}

/// One CSV column of the batch input format, for the schema command.
#[derive(Debug, Clone, Copy)]
pub struct CsvColumn {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// JSON input root
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchInput {
    pub assessments: Vec<AssessmentRecord>,
}

/// CSV/JSON record for one assessment request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, CsvColumns)]
pub struct AssessmentRecord {
    /// Annual income or profit (NGN)
    #[schemars(with = "f64")]
    pub income: Decimal,
    /// Taxpayer category: individual, freelancer, small_company, large_company
    pub category: String,
    /// State of residence: lagos, abuja, kano (anything else means no allowance)
    #[serde(default)]
    pub state: Option<String>,
    /// VAT taxable amount (NGN)
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub vat_base: Option<Decimal>,
    /// Withholding category: dividend, interest, rent, service
    #[serde(default)]
    pub withholding: Option<String>,
}

impl TryFrom<&AssessmentRecord> for TaxInput {
    type Error = InputError;

    fn try_from(record: &AssessmentRecord) -> Result<Self, Self::Error> {
        let category = TaxpayerCategory::from_code(&record.category)
            .ok_or_else(|| InputError::UnknownCategory(record.category.clone()))?;

        // Unknown states and withholding categories are defined fallbacks,
        // not errors: no allowance / no withholding.
        let state = match record.state.as_deref() {
            None => StateCode::Default,
            Some(s) => StateCode::from_code(s).unwrap_or_else(|| {
                log::warn!("unknown state '{}', no allowance applies", s);
                StateCode::Default
            }),
        };
        let withholding = record.withholding.as_deref().and_then(|s| {
            if s.is_empty() {
                return None;
            }
            let parsed = WithholdingCategory::from_code(s);
            if parsed.is_none() {
                log::warn!("unknown withholding category '{}', no withholding applies", s);
            }
            parsed
        });

        Ok(TaxInput {
            income: record.income,
            category,
            state,
            vat_base: record.vat_base,
            withholding,
        })
    }
}

/// Read assessment records from CSV
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<AssessmentRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let records: Result<Vec<AssessmentRecord>, _> =
        rdr.deserialize::<AssessmentRecord>().collect();
    Ok(records?)
}

/// Read assessment records from JSON
pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Vec<AssessmentRecord>> {
    let input: BatchInput = serde_json::from_reader(reader)?;
    Ok(input.assessments)
}
