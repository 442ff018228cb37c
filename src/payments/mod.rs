pub mod amortization;

pub use amortization::{generate_rows, AmortizationSchedule, EmiQuote, ScheduleRow};
