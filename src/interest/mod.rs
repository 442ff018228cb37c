use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// compound growth factor (1 + rate)^periods, computed by iteration
pub fn compound_factor(period_rate: Rate, periods: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    let base = Decimal::ONE + period_rate.as_decimal();
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

/// interest accrued on a balance over one month at the given annual rate
pub fn monthly_interest(balance: Money, annual_rate: Rate) -> Money {
    Money::from_decimal(balance.as_decimal() * annual_rate.monthly_rate().as_decimal())
}

/// deferred interest folded into principal over a moratorium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capitalization {
    pub original_principal: Money,
    pub new_principal: Money,
    pub amount_capitalized: Money,
    pub months: u32,
}

/// capitalize interest accruing monthly over a deferral period
///
/// no payments are made; each month's interest compounds into the balance
pub fn capitalize(principal: Money, annual_rate: Rate, months: u32) -> Capitalization {
    let factor = compound_factor(annual_rate.monthly_rate(), months);
    let new_principal = Money::from_decimal(principal.as_decimal() * factor);

    Capitalization {
        original_principal: principal,
        new_principal,
        amount_capitalized: new_principal - principal,
        months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_factor() {
        // 12% annual compounded monthly for a year
        let factor = compound_factor(Rate::from_percentage(dec!(12)).monthly_rate(), 12);
        let grown = Money::from_decimal(dec!(10000) * factor);

        assert_eq!(grown.round_dp(2), Money::from_str_exact("11268.25").unwrap());
    }

    #[test]
    fn test_compound_factor_degenerate_cases() {
        assert_eq!(compound_factor(Rate::from_percentage(dec!(10)), 0), Decimal::ONE);
        assert_eq!(compound_factor(Rate::ZERO, 24), Decimal::ONE);
    }

    #[test]
    fn test_monthly_interest() {
        let interest = monthly_interest(Money::from_major(100000), Rate::from_percentage(dec!(10)));
        assert_eq!(interest.round_dp(2), Money::from_str_exact("833.33").unwrap());
    }

    #[test]
    fn test_capitalization() {
        let cap = capitalize(Money::from_major(100000), Rate::from_percentage(dec!(8)), 12);

        assert_eq!(cap.original_principal, Money::from_major(100000));
        assert_eq!(cap.months, 12);
        // a year of deferral at 8% grows the balance by roughly 8.3%
        assert!(cap.new_principal > Money::from_major(108299));
        assert!(cap.new_principal < Money::from_major(108301));
        assert_eq!(cap.amount_capitalized, cap.new_principal - cap.original_principal);
    }

    #[test]
    fn test_capitalization_zero_rate() {
        let cap = capitalize(Money::from_major(50000), Rate::ZERO, 12);

        assert_eq!(cap.new_principal, cap.original_principal);
        assert!(cap.amount_capitalized.is_zero());
    }
}
