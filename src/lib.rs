pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod interest;
pub mod payments;
pub mod report;
pub mod types;

// re-export key types
pub use config::{CategoryProfile, LoanInput, SliderRange};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use interest::{capitalize, compound_factor, monthly_interest, Capitalization};
pub use payments::{generate_rows, AmortizationSchedule, EmiQuote, ScheduleRow};
pub use report::{QuoteReport, ReportRow};
pub use types::{LoanCategory, Period};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
