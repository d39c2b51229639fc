use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// State of residence, used for the annual allowance deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateCode {
    Lagos,
    Abuja,
    Kano,
    /// No state selected - no allowance applies.
    #[default]
    Default,
}

impl StateCode {
    pub fn from_code(s: &str) -> Option<StateCode> {
        match s.to_lowercase().as_str() {
            "lagos" => Some(StateCode::Lagos),
            "abuja" => Some(StateCode::Abuja),
            "kano" => Some(StateCode::Kano),
            "default" | "" => Some(StateCode::Default),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StateCode::Lagos => "lagos",
            StateCode::Abuja => "abuja",
            StateCode::Kano => "kano",
            StateCode::Default => "default",
        }
    }

    /// Annual state allowance deducted from income before the personal
    /// schedule applies.
    pub fn allowance(&self) -> Decimal {
        match self {
            StateCode::Lagos => dec!(200000),
            StateCode::Abuja => dec!(150000),
            StateCode::Kano => dec!(100000),
            StateCode::Default => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Who is being assessed. Determines which schedule or flat rate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxpayerCategory {
    /// PAYE employee
    #[default]
    Individual,
    Freelancer,
    /// Exempt from company income tax
    SmallCompany,
    /// Medium or large company
    LargeCompany,
}

impl TaxpayerCategory {
    pub fn from_code(s: &str) -> Option<TaxpayerCategory> {
        match s.to_lowercase().as_str() {
            "individual" => Some(TaxpayerCategory::Individual),
            "freelancer" => Some(TaxpayerCategory::Freelancer),
            "small_company" => Some(TaxpayerCategory::SmallCompany),
            "large_company" => Some(TaxpayerCategory::LargeCompany),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TaxpayerCategory::Individual => "individual",
            TaxpayerCategory::Freelancer => "freelancer",
            TaxpayerCategory::SmallCompany => "small_company",
            TaxpayerCategory::LargeCompany => "large_company",
        }
    }

    /// Personal categories use the progressive schedule and have a defined
    /// net pay.
    pub fn is_personal(&self) -> bool {
        matches!(
            self,
            TaxpayerCategory::Individual | TaxpayerCategory::Freelancer
        )
    }
}

impl std::fmt::Display for TaxpayerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Transaction type a withholding prepayment is collected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WithholdingCategory {
    Dividend,
    Interest,
    Rent,
    /// Professional service
    Service,
}

impl WithholdingCategory {
    pub fn from_code(s: &str) -> Option<WithholdingCategory> {
        match s.to_lowercase().as_str() {
            "dividend" => Some(WithholdingCategory::Dividend),
            "interest" => Some(WithholdingCategory::Interest),
            "rent" => Some(WithholdingCategory::Rent),
            "service" => Some(WithholdingCategory::Service),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WithholdingCategory::Dividend => "dividend",
            WithholdingCategory::Interest => "interest",
            WithholdingCategory::Rent => "rent",
            WithholdingCategory::Service => "service",
        }
    }

    /// Withholding rate applied to annual income.
    pub fn rate(&self) -> Decimal {
        match self {
            WithholdingCategory::Dividend => dec!(0.10),
            WithholdingCategory::Interest => dec!(0.10),
            WithholdingCategory::Rent => dec!(0.10),
            WithholdingCategory::Service => dec!(0.05),
        }
    }
}

impl std::fmt::Display for WithholdingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Flat VAT rate on the taxable amount.
pub fn vat_rate() -> Decimal {
    dec!(0.075)
}

/// Company income tax rate for medium/large companies.
pub fn company_income_tax_rate() -> Decimal {
    dec!(0.34)
}

/// Capital gains rate for medium/large companies.
pub fn company_cgt_rate() -> Decimal {
    dec!(0.30)
}
