pub mod bands;
pub mod ng;
pub mod summary;

pub use bands::{Band, BandSchedule};
pub use ng::{StateCode, TaxpayerCategory, WithholdingCategory};
pub use summary::{assess, assess_at, Assessment, TaxInput, ValidationError};
