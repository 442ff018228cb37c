/// quick start - minimal example to get started
use emi_calculator_rs::{AmortizationSchedule, LoanCategory, LoanInput, Money, QuoteReport, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 5 lakh general loan at 10.5% over 5 years
    let input = LoanInput::new(
        LoanCategory::General,
        Money::from_major(500000),
        Rate::from_percentage(dec!(10.5)),
        5,
    );

    let schedule = AmortizationSchedule::generate(&input)?;
    let report = QuoteReport::from_schedule(&schedule);

    println!("Monthly EMI:    {}", report.monthly_payment);
    println!("Total Interest: {}", report.total_interest);
    println!("Total Payment:  {}", report.total_payment);

    Ok(())
}
