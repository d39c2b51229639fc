use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single marginal band. The slice of taxable income above the previous
/// band's upper limit and up to `upper` is taxed at `rate`. `upper: None`
/// marks the unbounded final band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

/// Ordered marginal band schedule covering [0, ∞).
///
/// Upper limits are strictly increasing and the final band is unbounded, so
/// every non-negative amount falls in exactly one band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSchedule {
    bands: Vec<Band>,
}

impl BandSchedule {
    /// The annual personal income schedule (NGN), applied to
    /// individual/freelancer income after the state allowance.
    pub fn personal_income() -> Self {
        BandSchedule {
            bands: vec![
                Band {
                    upper: Some(dec!(800000)),
                    rate: Decimal::ZERO,
                },
                Band {
                    upper: Some(dec!(3000000)),
                    rate: dec!(0.15),
                },
                Band {
                    upper: Some(dec!(12000000)),
                    rate: dec!(0.18),
                },
                Band {
                    upper: Some(dec!(25000000)),
                    rate: dec!(0.21),
                },
                Band {
                    upper: Some(dec!(50000000)),
                    rate: dec!(0.23),
                },
                Band {
                    upper: None,
                    rate: dec!(0.25),
                },
            ],
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Total tax over `taxable` under the marginal schedule: each band taxes
    /// only the slice of `taxable` falling within it. Zero for non-positive
    /// amounts.
    pub fn marginal_tax(&self, taxable: Decimal) -> Decimal {
        if taxable <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for band in &self.bands {
            let slice = match band.upper {
                Some(upper) => taxable.min(upper) - lower,
                None => taxable - lower,
            };
            if slice <= Decimal::ZERO {
                break;
            }
            tax += slice * band.rate;
            match band.upper {
                Some(upper) if taxable > upper => lower = upper,
                _ => break,
            }
        }
        tax
    }

    /// The marginal rate applying at `amount` (the rate of the band
    /// containing it).
    pub fn rate_at(&self, amount: Decimal) -> Decimal {
        for band in &self.bands {
            match band.upper {
                Some(upper) if amount > upper => continue,
                _ => return band.rate,
            }
        }
        Decimal::ZERO
    }
}
