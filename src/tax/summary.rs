use crate::tax::bands::BandSchedule;
use crate::tax::ng::{self, StateCode, TaxpayerCategory, WithholdingCategory};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Validated inputs for a single assessment.
#[derive(Debug, Clone)]
pub struct TaxInput {
    pub income: Decimal,
    pub category: TaxpayerCategory,
    pub state: StateCode,
    /// VAT taxable amount, if any
    pub vat_base: Option<Decimal>,
    /// Withholding category; `None` means no withholding applies
    pub withholding: Option<WithholdingCategory>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("income must not be negative: {0}")]
    NegativeIncome(Decimal),
    #[error("VAT taxable amount must not be negative: {0}")]
    NegativeVatBase(Decimal),
}

/// Immutable result of one assessment. All amounts are annual NGN rounded
/// to 2 dp; `net_pay` is defined only for personal categories.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub income: Decimal,
    pub category: TaxpayerCategory,
    pub state: StateCode,
    pub allowance: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
    pub vat: Decimal,
    pub withholding_tax: Decimal,
    pub capital_gains_tax: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_pay: Option<Decimal>,
    pub computed_at: DateTime<Utc>,
}

/// Assess with a capture timestamp of now.
pub fn assess(input: &TaxInput) -> Result<Assessment, ValidationError> {
    assess_at(input, Utc::now())
}

/// Deterministic assessment core. Pure: no side effects beyond the returned
/// record; appending to history is the caller's concern.
pub fn assess_at(
    input: &TaxInput,
    computed_at: DateTime<Utc>,
) -> Result<Assessment, ValidationError> {
    if input.income < Decimal::ZERO {
        return Err(ValidationError::NegativeIncome(input.income));
    }
    if let Some(vat_base) = input.vat_base {
        if vat_base < Decimal::ZERO {
            return Err(ValidationError::NegativeVatBase(vat_base));
        }
    }

    let allowance = input.state.allowance();
    let taxable = (input.income - allowance).max(Decimal::ZERO);
    let schedule = BandSchedule::personal_income();

    let annual_tax = match input.category {
        TaxpayerCategory::Individual | TaxpayerCategory::Freelancer => {
            schedule.marginal_tax(taxable).round_dp(2)
        }
        TaxpayerCategory::SmallCompany => Decimal::ZERO,
        TaxpayerCategory::LargeCompany => {
            (input.income * ng::company_income_tax_rate()).round_dp(2)
        }
    };
    let monthly_tax = if annual_tax.is_zero() {
        Decimal::ZERO
    } else {
        (annual_tax / dec!(12)).round_dp(2)
    };

    let vat = input
        .vat_base
        .map(|base| (base * ng::vat_rate()).round_dp(2))
        .unwrap_or(Decimal::ZERO);

    let withholding_rate = input.withholding.map_or(Decimal::ZERO, |w| w.rate());
    let withholding_tax = (input.income * withholding_rate).round_dp(2);

    // Companies pay the flat corporate CGT rate; everyone else falls back to
    // the personal schedule over the same taxable base.
    let capital_gains_tax = match input.category {
        TaxpayerCategory::LargeCompany => (input.income * ng::company_cgt_rate()).round_dp(2),
        _ => schedule.marginal_tax(taxable).round_dp(2),
    };

    let net_pay = input
        .category
        .is_personal()
        .then(|| input.income - annual_tax - vat - withholding_tax);

    log::debug!(
        "assessed {} {}: taxable={}, annual={}, vat={}, wht={}, cgt={}",
        input.category,
        input.income,
        taxable,
        annual_tax,
        vat,
        withholding_tax,
        capital_gains_tax
    );

    Ok(Assessment {
        income: input.income,
        category: input.category,
        state: input.state,
        allowance,
        annual_tax,
        monthly_tax,
        vat,
        withholding_tax,
        capital_gains_tax,
        net_pay,
        computed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn input(income: Decimal, category: TaxpayerCategory, state: StateCode) -> TaxInput {
        TaxInput {
            income,
            category,
            state,
            vat_base: None,
            withholding: None,
        }
    }

    #[test]
    fn zero_income_individual_is_all_zero() {
        let assessment = assess_at(
            &TaxInput {
                income: Decimal::ZERO,
                category: TaxpayerCategory::Individual,
                state: StateCode::Default,
                vat_base: Some(Decimal::ZERO),
                withholding: Some(WithholdingCategory::Dividend),
            },
            at(),
        )
        .unwrap();

        assert_eq!(assessment.annual_tax, Decimal::ZERO);
        assert_eq!(assessment.monthly_tax, Decimal::ZERO);
        assert_eq!(assessment.vat, Decimal::ZERO);
        assert_eq!(assessment.withholding_tax, Decimal::ZERO);
        assert_eq!(assessment.capital_gains_tax, Decimal::ZERO);
        assert_eq!(assessment.net_pay, Some(Decimal::ZERO));
    }

    #[test]
    fn lagos_allowance_keeps_1m_income_in_zero_band() {
        let assessment = assess_at(
            &input(dec!(1000000), TaxpayerCategory::Individual, StateCode::Lagos),
            at(),
        )
        .unwrap();

        assert_eq!(assessment.allowance, dec!(200000));
        assert_eq!(assessment.annual_tax, Decimal::ZERO);
        assert_eq!(assessment.net_pay, Some(dec!(1000000)));
    }

    #[test]
    fn freelancer_paye_with_allowance() {
        // taxable = 5,000,000 - 100,000 = 4,900,000
        // 2,200,000 * 15% + 1,900,000 * 18% = 672,000
        let assessment = assess_at(
            &input(dec!(5000000), TaxpayerCategory::Freelancer, StateCode::Kano),
            at(),
        )
        .unwrap();

        assert_eq!(assessment.annual_tax, dec!(672000.00));
        assert_eq!(assessment.monthly_tax, dec!(56000.00));
    }

    #[test]
    fn large_company_flat_rates() {
        let assessment = assess_at(
            &input(
                dec!(10000000),
                TaxpayerCategory::LargeCompany,
                StateCode::Default,
            ),
            at(),
        )
        .unwrap();

        assert_eq!(assessment.annual_tax, dec!(3400000.00));
        assert_eq!(assessment.monthly_tax, dec!(283333.33));
        assert_eq!(assessment.capital_gains_tax, dec!(3000000.00));
        assert_eq!(assessment.net_pay, None);
    }

    #[test]
    fn small_company_is_exempt_at_any_income() {
        for income in [Decimal::ZERO, dec!(750000), dec!(900000000)] {
            let assessment = assess_at(
                &input(income, TaxpayerCategory::SmallCompany, StateCode::Abuja),
                at(),
            )
            .unwrap();
            assert_eq!(assessment.annual_tax, Decimal::ZERO);
            assert_eq!(assessment.monthly_tax, Decimal::ZERO);
            assert_eq!(assessment.net_pay, None);
        }
    }

    #[test]
    fn vat_applied_at_flat_rate() {
        let mut req = input(dec!(1000000), TaxpayerCategory::Individual, StateCode::Lagos);
        req.vat_base = Some(dec!(200000));
        let assessment = assess_at(&req, at()).unwrap();

        assert_eq!(assessment.vat, dec!(15000.000));
        assert_eq!(assessment.net_pay, Some(dec!(985000.000)));
    }

    #[test]
    fn withholding_uses_category_rate() {
        let mut req = input(dec!(2000000), TaxpayerCategory::Freelancer, StateCode::Default);
        req.withholding = Some(WithholdingCategory::Service);
        let assessment = assess_at(&req, at()).unwrap();

        assert_eq!(assessment.withholding_tax, dec!(100000.00));
    }

    #[test]
    fn no_withholding_category_means_no_withholding() {
        let assessment = assess_at(
            &input(dec!(2000000), TaxpayerCategory::Individual, StateCode::Default),
            at(),
        )
        .unwrap();
        assert_eq!(assessment.withholding_tax, Decimal::ZERO);
    }

    #[test]
    fn personal_cgt_reuses_the_income_schedule() {
        // taxable = 10,000,000 - 100,000 = 9,900,000
        // 2,200,000 * 15% + 6,900,000 * 18% = 1,572,000
        let assessment = assess_at(
            &input(dec!(10000000), TaxpayerCategory::Individual, StateCode::Kano),
            at(),
        )
        .unwrap();
        assert_eq!(assessment.capital_gains_tax, dec!(1572000.00));
        assert_eq!(assessment.capital_gains_tax, assessment.annual_tax);
    }

    #[test]
    fn negative_income_is_rejected() {
        let err = assess_at(
            &input(dec!(-1), TaxpayerCategory::Individual, StateCode::Default),
            at(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NegativeIncome(dec!(-1)));
    }

    #[test]
    fn negative_vat_base_is_rejected() {
        let mut req = input(dec!(1000), TaxpayerCategory::Individual, StateCode::Default);
        req.vat_base = Some(dec!(-50));
        let err = assess_at(&req, at()).unwrap_err();
        assert_eq!(err, ValidationError::NegativeVatBase(dec!(-50)));
    }

    #[test]
    fn net_pay_subtracts_all_personal_levies() {
        let req = TaxInput {
            income: dec!(1000000),
            category: TaxpayerCategory::Individual,
            state: StateCode::Lagos,
            vat_base: Some(dec!(100000)),
            withholding: Some(WithholdingCategory::Dividend),
        };
        let assessment = assess_at(&req, at()).unwrap();

        // annual tax 0, vat 7,500, wht 100,000
        assert_eq!(assessment.vat, dec!(7500.000));
        assert_eq!(assessment.withholding_tax, dec!(100000.00));
        assert_eq!(assessment.net_pay, Some(dec!(892500.000)));
    }

    #[test]
    fn timestamp_is_captured() {
        let assessment = assess_at(
            &input(dec!(100), TaxpayerCategory::Individual, StateCode::Default),
            at(),
        )
        .unwrap();
        assert_eq!(assessment.computed_at, at());
    }
}
