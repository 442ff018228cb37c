/// education loan with a 12 month moratorium before repayment begins
use emi_calculator_rs::{AmortizationSchedule, LoanCategory, LoanInput, Money, QuoteReport, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::new(
        LoanCategory::Education,
        Money::from_major(100000),
        Rate::from_percentage(dec!(8)),
        5,
    )
    .with_moratorium(12);

    let schedule = AmortizationSchedule::generate(&input)?;

    println!(
        "balance after moratorium: {}",
        schedule
            .moratorium_rows()
            .last()
            .map(|row| row.balance.to_string())
            .unwrap_or_default()
    );

    // full table: 12 moratorium rows, then 60 repayment rows
    println!("{}", QuoteReport::from_schedule(&schedule));

    Ok(())
}
