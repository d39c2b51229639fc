//! Report command - render the most recent assessment as an HTML summary
//!
//! Generates a self-contained HTML document with the fixed field order:
//! date, type, state, income, allowance, annual tax, monthly estimate, VAT,
//! withholding, capital gains, net pay.

use crate::cmd::{format_ngn, read_records, LangArg};
use crate::history::History;
use crate::i18n::Language;
use crate::tax::{assess, Assessment, TaxInput};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Input file (CSV or JSON). Reads from stdin with "-".
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Display language
    #[arg(short, long, value_enum, default_value_t = LangArg::En)]
    lang: LangArg,

    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_records(&self.input)?;

        let mut history = History::new();
        for record in &records {
            let input = TaxInput::try_from(record)?;
            history.push(assess(&input)?);
        }
        let latest = history
            .latest()
            .ok_or_else(|| anyhow::anyhow!("no assessments in input"))?;

        let html = generate(latest, self.lang.into());

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            println!("Summary written to: {}", output_path.display());
        } else {
            let temp_path = std::env::temp_dir().join("taxng-summary.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened summary in browser: {}", temp_path.display());
        }

        Ok(())
    }
}

/// Render the summary document. Field order is fixed.
fn generate(assessment: &Assessment, lang: Language) -> String {
    let t = lang.labels();

    let mut fields: Vec<(&str, String)> = vec![
        (
            t.date,
            assessment
                .computed_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ),
        (t.taxpayer_type, assessment.category.to_string()),
        (t.state, assessment.state.to_string()),
        (t.income, format_ngn(assessment.income)),
        (t.allowance, format_ngn(assessment.allowance)),
        (t.annual_tax, format_ngn(assessment.annual_tax)),
        (t.monthly_estimate, format_ngn(assessment.monthly_tax)),
        (t.vat, format_ngn(assessment.vat)),
        (t.withholding, format_ngn(assessment.withholding_tax)),
        (t.capital_gains, format_ngn(assessment.capital_gains_tax)),
    ];
    if let Some(net_pay) = assessment.net_pay {
        fields.push((t.net_pay, format_ngn(net_pay)));
    }

    let rows: String = fields
        .iter()
        .map(|(label, value)| format!("      <tr><th>{label}</th><td>{value}</td></tr>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 40em; margin: 2em auto; }}
    h1 {{ font-size: 1.3em; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ text-align: left; padding: 0.4em 0.8em; border-bottom: 1px solid #ddd; }}
    td {{ text-align: right; font-variant-numeric: tabular-nums; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <table>
{rows}  </table>
</body>
</html>
"#,
        title = t.title,
        rows = rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::{assess_at, StateCode, TaxpayerCategory};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample(category: TaxpayerCategory) -> Assessment {
        assess_at(
            &TaxInput {
                income: dec!(10000000),
                category,
                state: StateCode::Lagos,
                vat_base: None,
                withholding: None,
            },
            Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn personal_summary_includes_net_pay() {
        let html = generate(&sample(TaxpayerCategory::Individual), Language::En);
        assert!(html.contains("Nigeria Tax Calculation Summary"));
        assert!(html.contains("Net Pay"));
        assert!(html.contains("2026-08-01 09:00:00"));
    }

    #[test]
    fn company_summary_omits_net_pay() {
        let html = generate(&sample(TaxpayerCategory::LargeCompany), Language::En);
        assert!(!html.contains("Net Pay"));
        assert!(html.contains("Capital Gains Tax"));
        // 10,000,000 * 34%
        assert!(html.contains("3,400,000.00"));
    }

    #[test]
    fn pidgin_labels() {
        let html = generate(&sample(TaxpayerCategory::Freelancer), Language::Pg);
        assert!(html.contains("Wetin You Go Take Home"));
    }
}
