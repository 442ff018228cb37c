use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LoanInput;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{capitalize, compound_factor, monthly_interest};
use crate::types::Period;

/// fixed monthly installment quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiQuote {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl EmiQuote {
    /// compute the quote for a loan input
    pub fn compute(input: &LoanInput) -> Result<Self> {
        input.validate()?;

        let term_months = input.term_months();
        let moratorium = input.effective_moratorium();

        // interest accrued during a moratorium is capitalized before the
        // annuity formula applies
        let financed = if moratorium > 0 {
            capitalize(input.principal, input.annual_rate, moratorium).new_principal
        } else {
            input.principal
        };

        let monthly_payment = annuity_payment(financed, input.annual_rate.monthly_rate(), term_months);
        let total_payment = monthly_payment * Decimal::from(term_months);
        // totals are measured against the original principal, not the
        // capitalized one
        let total_interest = total_payment - input.principal;

        Ok(Self {
            monthly_payment,
            total_interest,
            total_payment,
        })
    }
}

/// fixed payment that fully repays a principal over the given months
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1); a zero rate degenerates to
/// straight division
fn annuity_payment(principal: Money, monthly_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return principal;
    }

    if monthly_rate.is_zero() {
        return principal / Decimal::from(months);
    }

    let r = monthly_rate.as_decimal();
    let factor = compound_factor(monthly_rate, months);

    Money::from_decimal(principal.as_decimal() * r * factor / (factor - Decimal::ONE))
}

/// one period of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: Period,
    pub payment: Money,
    pub interest: Money,
    pub principal_paid: Money,
    pub balance: Money,
}

/// generate the month-by-month schedule for a given fixed payment
///
/// moratorium rows accrue and capitalize interest without payments;
/// repayment rows split the payment into interest and principal
pub fn generate_rows(input: &LoanInput, payment: Money) -> Result<Vec<ScheduleRow>> {
    input.validate()?;

    let term_months = input.term_months();
    let moratorium = input.effective_moratorium();
    let mut rows = Vec::with_capacity((moratorium + term_months) as usize);
    let mut balance = input.principal;

    for month in 1..=moratorium {
        let interest = monthly_interest(balance, input.annual_rate);
        balance += interest;

        rows.push(ScheduleRow {
            period: Period::Moratorium(month),
            payment: Money::ZERO,
            interest,
            principal_paid: Money::ZERO,
            balance,
        });
    }

    for month in 1..=term_months {
        let interest = monthly_interest(balance, input.annual_rate);
        let principal_paid = payment - interest;

        // the final row is forced to zero to absorb rounding drift
        balance = if month == term_months {
            Money::ZERO
        } else {
            (balance - principal_paid).max(Money::ZERO)
        };

        rows.push(ScheduleRow {
            period: Period::Repayment(month),
            payment,
            interest,
            principal_paid,
            balance,
        });
    }

    Ok(rows)
}

/// amortization schedule for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub input: LoanInput,
    pub quote: EmiQuote,
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// compute the quote and materialize the full schedule
    pub fn generate(input: &LoanInput) -> Result<Self> {
        let quote = EmiQuote::compute(input)?;
        let rows = generate_rows(input, quote.monthly_payment)?;

        Ok(Self {
            input: input.clone(),
            quote,
            rows,
        })
    }

    /// rows of the deferral phase
    pub fn moratorium_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|row| row.period.is_moratorium())
    }

    /// rows of the repayment phase
    pub fn repayment_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|row| !row.period.is_moratorium())
    }

    /// serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
