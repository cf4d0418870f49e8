/// quick start - minimal example to get started
use note_discount::{DiscountEngine, NoteTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 100,000 note held for 30 days at 5%, with a flat 500 charge
    let terms = NoteTerms::builder()
        .note_amount(100_000)
        .interest_rate(5.0)
        .duration_days(30)
        .charge(500)
        .build()?;

    let engine = DiscountEngine::new();
    let payout = engine.payment_amount(terms)?;

    println!("payout: {}", payout);

    Ok(())
}
