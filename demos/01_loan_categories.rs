/// quote every loan category from its default slider position
use emi_calculator_rs::{CategoryProfile, EmiQuote, LoanCategory};
use emi_calculator_rs::format;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for category in LoanCategory::ALL {
        let profile = CategoryProfile::for_category(category);
        let input = profile.default_input();
        let quote = EmiQuote::compute(&input)?;

        println!(
            "{:<16} {} @ {} for {} years -> EMI {}",
            category.label(),
            format::inr_symbol(input.principal),
            input.annual_rate,
            input.tenure_years,
            format::inr_symbol(quote.monthly_payment),
        );
    }

    Ok(())
}
