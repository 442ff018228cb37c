/// serialize a computed schedule to JSON and read it back
use emi_calculator_rs::{AmortizationSchedule, CategoryProfile, LoanCategory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = CategoryProfile::for_category(LoanCategory::Car).default_input();
    let schedule = AmortizationSchedule::generate(&input)?;

    let json = schedule.to_json()?;
    println!("{}", json);

    let restored = AmortizationSchedule::from_json(&json)?;
    assert_eq!(schedule, restored);

    Ok(())
}
