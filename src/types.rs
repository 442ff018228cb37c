use serde::{Deserialize, Serialize};
use std::fmt;

/// loan categories offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanCategory {
    General,
    Home,
    Car,
    Education,
    Bike,
}

impl LoanCategory {
    pub const ALL: [LoanCategory; 5] = [
        LoanCategory::General,
        LoanCategory::Home,
        LoanCategory::Car,
        LoanCategory::Education,
        LoanCategory::Bike,
    ];

    /// whether repayment may be deferred behind a moratorium
    pub fn supports_moratorium(&self) -> bool {
        matches!(self, LoanCategory::Education)
    }

    /// human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            LoanCategory::General => "General Loan",
            LoanCategory::Home => "Home Loan",
            LoanCategory::Car => "Car Loan",
            LoanCategory::Education => "Education Loan",
            LoanCategory::Bike => "Bike Loan",
        }
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// position of a schedule row within the loan's life
///
/// moratorium months are counted separately from repayment months; both
/// indices are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Moratorium(u32),
    Repayment(u32),
}

impl Period {
    /// 1-based index within the row's phase
    pub fn index(&self) -> u32 {
        match self {
            Period::Moratorium(i) | Period::Repayment(i) => *i,
        }
    }

    pub fn is_moratorium(&self) -> bool {
        matches!(self, Period::Moratorium(_))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Moratorium(i) => write!(f, "Moratorium {}", i),
            Period::Repayment(i) => write!(f, "{}", i),
        }
    }
}
