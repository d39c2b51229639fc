//! Display strings for the CLI output. English and Nigerian Pidgin.
//!
//! Presentation only; the active language never affects computation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    /// Nigerian Pidgin
    Pg,
}

/// Labels for rendering an assessment.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub date: &'static str,
    pub state: &'static str,
    pub taxpayer_type: &'static str,
    pub income: &'static str,
    pub allowance: &'static str,
    pub annual_tax: &'static str,
    pub monthly_estimate: &'static str,
    pub vat: &'static str,
    pub withholding: &'static str,
    pub capital_gains: &'static str,
    pub net_pay: &'static str,
    pub history: &'static str,
    pub invalid_input: &'static str,
}

static EN: Labels = Labels {
    title: "Nigeria Tax Calculation Summary",
    date: "Date",
    state: "State",
    taxpayer_type: "Taxpayer Type",
    income: "Annual Income",
    allowance: "State Allowance",
    annual_tax: "Annual Income Tax",
    monthly_estimate: "Monthly PAYE Estimate",
    vat: "VAT (7.5%)",
    withholding: "Withholding Tax",
    capital_gains: "Capital Gains Tax",
    net_pay: "Net Pay",
    history: "Calculation History",
    invalid_input: "Please enter a valid positive number",
};

static PG: Labels = Labels {
    title: "Naija Tax Calculation Summary",
    date: "Date",
    state: "State",
    taxpayer_type: "Wetin You dey Pay Tax For",
    income: "How Much You Dey Earn",
    allowance: "State Allowance",
    annual_tax: "Total Tax for Year",
    monthly_estimate: "Monthly Tax",
    vat: "VAT (7.5%)",
    withholding: "Withholding Tax",
    capital_gains: "Capital Gains Tax",
    net_pay: "Wetin You Go Take Home",
    history: "Past Calculation",
    invalid_input: "Abeg enter correct positive number",
};

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Pg => &PG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_translate_net_pay() {
        assert_eq!(Language::En.labels().net_pay, "Net Pay");
        assert_eq!(Language::Pg.labels().net_pay, "Wetin You Go Take Home");
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
