//! Compute command - a single assessment from command-line inputs

use crate::cmd::{format_ngn, LangArg};
use crate::i18n::Language;
use crate::tax::{assess, StateCode, TaxInput, TaxpayerCategory, WithholdingCategory};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ComputeCommand {
    /// Annual income or profit (NGN)
    #[arg(short, long)]
    income: Decimal,

    /// Taxpayer category
    #[arg(short, long, value_enum, default_value_t = CategoryArg::Individual)]
    category: CategoryArg,

    /// State of residence (for the allowance deduction)
    #[arg(short, long, value_enum, default_value_t = StateArg::Default)]
    state: StateArg,

    /// VAT taxable amount (NGN)
    #[arg(short, long)]
    vat: Option<Decimal>,

    /// Withholding category
    #[arg(short, long, value_enum)]
    wht: Option<WithholdingArg>,

    /// Display language
    #[arg(short, long, value_enum, default_value_t = LangArg::En)]
    lang: LangArg,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum CategoryArg {
    #[default]
    Individual,
    Freelancer,
    SmallCompany,
    LargeCompany,
}

impl From<CategoryArg> for TaxpayerCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Individual => TaxpayerCategory::Individual,
            CategoryArg::Freelancer => TaxpayerCategory::Freelancer,
            CategoryArg::SmallCompany => TaxpayerCategory::SmallCompany,
            CategoryArg::LargeCompany => TaxpayerCategory::LargeCompany,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum StateArg {
    Lagos,
    Abuja,
    Kano,
    #[default]
    Default,
}

impl From<StateArg> for StateCode {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Lagos => StateCode::Lagos,
            StateArg::Abuja => StateCode::Abuja,
            StateArg::Kano => StateCode::Kano,
            StateArg::Default => StateCode::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WithholdingArg {
    Dividend,
    Interest,
    Rent,
    Service,
}

impl From<WithholdingArg> for WithholdingCategory {
    fn from(arg: WithholdingArg) -> Self {
        match arg {
            WithholdingArg::Dividend => WithholdingCategory::Dividend,
            WithholdingArg::Interest => WithholdingCategory::Interest,
            WithholdingArg::Rent => WithholdingCategory::Rent,
            WithholdingArg::Service => WithholdingCategory::Service,
        }
    }
}

impl ComputeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = TaxInput {
            income: self.income,
            category: self.category.into(),
            state: self.state.into(),
            vat_base: self.vat,
            withholding: self.wht.map(Into::into),
        };
        let assessment = assess(&input)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        } else {
            self.print_summary(&assessment, self.lang.into());
        }
        Ok(())
    }

    fn print_summary(&self, assessment: &crate::tax::Assessment, lang: Language) {
        let t = lang.labels();

        println!();
        println!("{}", t.title);
        println!();
        println!(
            "{}: {}",
            t.date,
            assessment.computed_at.format("%Y-%m-%d %H:%M:%S")
        );
        println!("{}: {}", t.taxpayer_type, assessment.category);
        println!("{}: {}", t.state, assessment.state);
        println!("{}: {}", t.income, format_ngn(assessment.income));
        println!("{}: {}", t.allowance, format_ngn(assessment.allowance));
        println!();
        println!("{}: {}", t.annual_tax, format_ngn(assessment.annual_tax));
        println!(
            "{}: {}",
            t.monthly_estimate,
            format_ngn(assessment.monthly_tax)
        );
        println!("{}: {}", t.vat, format_ngn(assessment.vat));
        println!("{}: {}", t.withholding, format_ngn(assessment.withholding_tax));
        println!(
            "{}: {}",
            t.capital_gains,
            format_ngn(assessment.capital_gains_tax)
        );
        if let Some(net_pay) = assessment.net_pay {
            println!("{}: {}", t.net_pay, format_ngn(net_pay));
        }
        println!();
    }
}
