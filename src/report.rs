use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format;
use crate::payments::{AmortizationSchedule, ScheduleRow};

/// one rendered schedule table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub period: String,
    pub payment: String,
    pub interest: String,
    pub principal: String,
    pub balance: String,
}

/// currency-formatted view of a quote and its schedule, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub category: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_payment: String,
    pub rows: Vec<ReportRow>,
}

impl QuoteReport {
    /// render a computed schedule into display strings
    pub fn from_schedule(schedule: &AmortizationSchedule) -> Self {
        Self {
            category: schedule.input.category.label().to_string(),
            monthly_payment: format::inr_symbol(schedule.quote.monthly_payment),
            total_interest: format::inr_symbol(schedule.quote.total_interest),
            total_payment: format::inr_symbol(schedule.quote.total_payment),
            rows: schedule.rows.iter().map(render_row).collect(),
        }
    }
}

/// moratorium rows carry no payment or principal; rendered as "-"
fn render_row(row: &ScheduleRow) -> ReportRow {
    let (payment, principal) = if row.period.is_moratorium() {
        ("-".to_string(), "-".to_string())
    } else {
        (format::inr(row.payment), format::inr(row.principal_paid))
    };

    ReportRow {
        period: row.period.to_string(),
        payment,
        interest: format::inr(row.interest),
        principal,
        balance: format::inr(row.balance),
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.category)?;
        writeln!(f, "Monthly EMI:    {}", self.monthly_payment)?;
        writeln!(f, "Total Interest: {}", self.total_interest)?;
        writeln!(f, "Total Payment:  {}", self.total_payment)?;
        writeln!(
            f,
            "{:<14} {:>15} {:>15} {:>15} {:>15}",
            "Month", "Payment", "Interest", "Principal", "Balance"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<14} {:>15} {:>15} {:>15} {:>15}",
                row.period, row.payment, row.interest, row.principal, row.balance
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoanInput;
    use crate::decimal::{Money, Rate};
    use crate::types::LoanCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scalars_carry_symbol() {
        let input = LoanInput::new(
            LoanCategory::General,
            Money::from_major(100000),
            Rate::from_percentage(dec!(10)),
            1,
        );
        let schedule = AmortizationSchedule::generate(&input).unwrap();

        let report = QuoteReport::from_schedule(&schedule);

        assert_eq!(report.monthly_payment, "₹8,791.59");
        assert_eq!(report.category, "General Loan");
        assert_eq!(report.rows.len(), 12);
        assert_eq!(report.rows[0].period, "1");
        assert_eq!(report.rows[0].payment, "8,791.59");
    }

    #[test]
    fn test_moratorium_rows_render_dashes() {
        let input = LoanInput::new(
            LoanCategory::Education,
            Money::from_major(100000),
            Rate::from_percentage(dec!(8)),
            5,
        )
        .with_moratorium(12);
        let schedule = AmortizationSchedule::generate(&input).unwrap();

        let report = QuoteReport::from_schedule(&schedule);

        assert_eq!(report.rows[0].period, "Moratorium 1");
        assert_eq!(report.rows[0].payment, "-");
        assert_eq!(report.rows[0].principal, "-");
        assert_eq!(report.rows[0].interest, "666.67");
        assert_eq!(report.rows[12].period, "1");
        assert_ne!(report.rows[12].payment, "-");
    }

    #[test]
    fn test_final_row_balance_is_zero() {
        let input = LoanInput::new(
            LoanCategory::Bike,
            Money::from_major(100000),
            Rate::from_percentage(dec!(11)),
            3,
        );
        let schedule = AmortizationSchedule::generate(&input).unwrap();

        let report = QuoteReport::from_schedule(&schedule);

        assert_eq!(report.rows.last().unwrap().balance, "0.00");
    }
}
