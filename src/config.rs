use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanCategory;

/// loan terms supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub category: LoanCategory,
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_years: u32,
    pub moratorium_months: u32,
}

impl LoanInput {
    /// create loan input without a moratorium
    pub fn new(category: LoanCategory, principal: Money, annual_rate: Rate, tenure_years: u32) -> Self {
        Self {
            category,
            principal,
            annual_rate,
            tenure_years,
            moratorium_months: 0,
        }
    }

    /// set the moratorium period in months
    pub fn with_moratorium(mut self, months: u32) -> Self {
        self.moratorium_months = months;
        self
    }

    /// repayment months
    pub fn term_months(&self) -> u32 {
        self.tenure_years * 12
    }

    /// moratorium months that actually apply, given the category
    pub fn effective_moratorium(&self) -> u32 {
        if self.category.supports_moratorium() {
            self.moratorium_months
        } else {
            0
        }
    }

    /// reject inputs the amortization math cannot meaningfully handle
    pub fn validate(&self) -> Result<()> {
        if self.principal <= Money::ZERO {
            return Err(LoanError::InvalidInput {
                message: format!("principal must be positive, got {}", self.principal),
            });
        }

        if self.tenure_years == 0 {
            return Err(LoanError::InvalidInput {
                message: "tenure must be at least one year".to_string(),
            });
        }

        if self.annual_rate.is_negative() {
            return Err(LoanError::InvalidInput {
                message: format!("interest rate cannot be negative, got {}", self.annual_rate),
            });
        }

        Ok(())
    }
}

/// inclusive numeric range with a slider step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl SliderRange {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }
}

/// input bounds and defaults for one loan category
///
/// amounts are in currency units, rates in percent per annum, tenure in
/// years, moratorium in months (education only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: LoanCategory,
    pub amount: SliderRange,
    pub rate: SliderRange,
    pub tenure_years: SliderRange,
    pub moratorium_months: Option<SliderRange>,
    default_amount: Decimal,
    default_rate: Decimal,
    default_tenure_years: u32,
    default_moratorium_months: u32,
}

impl CategoryProfile {
    /// profile for the given category
    pub fn for_category(category: LoanCategory) -> Self {
        match category {
            LoanCategory::General => Self::general(),
            LoanCategory::Home => Self::home(),
            LoanCategory::Car => Self::car(),
            LoanCategory::Education => Self::education(),
            LoanCategory::Bike => Self::bike(),
        }
    }

    /// general-purpose loan profile
    pub fn general() -> Self {
        Self {
            category: LoanCategory::General,
            amount: SliderRange::new(dec!(10000), dec!(2000000), dec!(10000)),
            rate: SliderRange::new(dec!(5), dec!(20), dec!(0.1)),
            tenure_years: SliderRange::new(dec!(1), dec!(10), dec!(1)),
            moratorium_months: None,
            default_amount: dec!(500000),
            default_rate: dec!(10.5),
            default_tenure_years: 5,
            default_moratorium_months: 0,
        }
    }

    /// home loan profile
    pub fn home() -> Self {
        Self {
            category: LoanCategory::Home,
            amount: SliderRange::new(dec!(500000), dec!(20000000), dec!(100000)),
            rate: SliderRange::new(dec!(6), dec!(15), dec!(0.1)),
            tenure_years: SliderRange::new(dec!(5), dec!(30), dec!(1)),
            moratorium_months: None,
            default_amount: dec!(3000000),
            default_rate: dec!(8.5),
            default_tenure_years: 20,
            default_moratorium_months: 0,
        }
    }

    /// car loan profile
    pub fn car() -> Self {
        Self {
            category: LoanCategory::Car,
            amount: SliderRange::new(dec!(100000), dec!(5000000), dec!(50000)),
            rate: SliderRange::new(dec!(7), dec!(18), dec!(0.1)),
            tenure_years: SliderRange::new(dec!(1), dec!(8), dec!(1)),
            moratorium_months: None,
            default_amount: dec!(800000),
            default_rate: dec!(9.5),
            default_tenure_years: 5,
            default_moratorium_months: 0,
        }
    }

    /// education loan profile, the only one with a moratorium slider
    pub fn education() -> Self {
        Self {
            category: LoanCategory::Education,
            amount: SliderRange::new(dec!(50000), dec!(5000000), dec!(50000)),
            rate: SliderRange::new(dec!(6), dec!(16), dec!(0.1)),
            tenure_years: SliderRange::new(dec!(1), dec!(15), dec!(1)),
            moratorium_months: Some(SliderRange::new(dec!(0), dec!(60), dec!(1))),
            default_amount: dec!(1000000),
            default_rate: dec!(8),
            default_tenure_years: 7,
            default_moratorium_months: 12,
        }
    }

    /// bike loan profile
    pub fn bike() -> Self {
        Self {
            category: LoanCategory::Bike,
            amount: SliderRange::new(dec!(20000), dec!(500000), dec!(10000)),
            rate: SliderRange::new(dec!(8), dec!(20), dec!(0.1)),
            tenure_years: SliderRange::new(dec!(1), dec!(5), dec!(1)),
            moratorium_months: None,
            default_amount: dec!(100000),
            default_rate: dec!(11),
            default_tenure_years: 3,
            default_moratorium_months: 0,
        }
    }

    /// mid-range starting input for this category
    pub fn default_input(&self) -> LoanInput {
        LoanInput {
            category: self.category,
            principal: Money::from_decimal(self.default_amount),
            annual_rate: Rate::from_percentage(self.default_rate),
            tenure_years: self.default_tenure_years,
            moratorium_months: self.default_moratorium_months,
        }
    }

    /// snap out-of-range values to the nearest bound
    pub fn clamp(&self, input: &LoanInput) -> LoanInput {
        let tenure = self.tenure_years.clamp(Decimal::from(input.tenure_years));
        let moratorium = match &self.moratorium_months {
            Some(range) => range.clamp(Decimal::from(input.moratorium_months)),
            None => Decimal::ZERO,
        };

        LoanInput {
            category: self.category,
            principal: Money::from_decimal(self.amount.clamp(input.principal.as_decimal())),
            annual_rate: Rate::from_percentage(self.rate.clamp(input.annual_rate.as_percentage())),
            tenure_years: tenure.to_u32().unwrap_or(self.default_tenure_years),
            moratorium_months: moratorium.to_u32().unwrap_or(0),
        }
    }

    /// verify every field sits within this category's slider bounds
    pub fn check(&self, input: &LoanInput) -> Result<()> {
        if !self.amount.contains(input.principal.as_decimal()) {
            return Err(LoanError::OutOfRange {
                field: "amount",
                value: input.principal.as_decimal(),
                min: self.amount.min,
                max: self.amount.max,
            });
        }

        if !self.rate.contains(input.annual_rate.as_percentage()) {
            return Err(LoanError::OutOfRange {
                field: "interest rate",
                value: input.annual_rate.as_percentage(),
                min: self.rate.min,
                max: self.rate.max,
            });
        }

        if !self.tenure_years.contains(Decimal::from(input.tenure_years)) {
            return Err(LoanError::OutOfRange {
                field: "tenure",
                value: Decimal::from(input.tenure_years),
                min: self.tenure_years.min,
                max: self.tenure_years.max,
            });
        }

        match &self.moratorium_months {
            Some(range) => {
                if !range.contains(Decimal::from(input.moratorium_months)) {
                    return Err(LoanError::OutOfRange {
                        field: "moratorium",
                        value: Decimal::from(input.moratorium_months),
                        min: range.min,
                        max: range.max,
                    });
                }
            }
            None => {
                if input.moratorium_months != 0 {
                    return Err(LoanError::OutOfRange {
                        field: "moratorium",
                        value: Decimal::from(input.moratorium_months),
                        min: Decimal::ZERO,
                        max: Decimal::ZERO,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        for category in LoanCategory::ALL {
            let profile = CategoryProfile::for_category(category);
            let input = profile.default_input();

            assert!(input.validate().is_ok());
            assert!(profile.check(&input).is_ok());
        }
    }

    #[test]
    fn test_only_education_has_moratorium_slider() {
        for category in LoanCategory::ALL {
            let profile = CategoryProfile::for_category(category);
            assert_eq!(
                profile.moratorium_months.is_some(),
                category.supports_moratorium()
            );
        }
    }

    #[test]
    fn test_clamp_snaps_to_bounds() {
        let profile = CategoryProfile::general();
        let wild = LoanInput::new(
            LoanCategory::General,
            Money::from_major(9000000),
            Rate::from_percentage(dec!(25)),
            40,
        );

        let clamped = profile.clamp(&wild);

        assert_eq!(clamped.principal, Money::from_major(2000000));
        assert_eq!(clamped.annual_rate, Rate::from_percentage(dec!(20)));
        assert_eq!(clamped.tenure_years, 10);
        assert_eq!(clamped.moratorium_months, 0);
    }

    #[test]
    fn test_check_rejects_out_of_range_amount() {
        let profile = CategoryProfile::bike();
        let input = LoanInput::new(
            LoanCategory::Bike,
            Money::from_major(5000000),
            Rate::from_percentage(dec!(12)),
            3,
        );

        let err = profile.check(&input).unwrap_err();
        assert!(matches!(err, LoanError::OutOfRange { field: "amount", .. }));
    }

    #[test]
    fn test_check_rejects_moratorium_outside_education() {
        let profile = CategoryProfile::car();
        let input = profile.default_input().with_moratorium(6);

        assert!(profile.check(&input).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let valid = CategoryProfile::general().default_input();

        let mut zero_principal = valid.clone();
        zero_principal.principal = Money::ZERO;
        assert!(matches!(
            zero_principal.validate().unwrap_err(),
            LoanError::InvalidInput { .. }
        ));

        let mut zero_tenure = valid.clone();
        zero_tenure.tenure_years = 0;
        assert!(zero_tenure.validate().is_err());

        let mut negative_rate = valid;
        negative_rate.annual_rate = Rate::from_percentage(dec!(-1));
        assert!(negative_rate.validate().is_err());
    }

    #[test]
    fn test_effective_moratorium_by_category() {
        let education = CategoryProfile::education().default_input().with_moratorium(18);
        assert_eq!(education.effective_moratorium(), 18);

        let car = CategoryProfile::car().default_input().with_moratorium(18);
        assert_eq!(car.effective_moratorium(), 0);
    }
}
