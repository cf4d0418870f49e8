/// validation - how rejected terms surface to the caller
use note_discount::{DiscountEngine, DiscountError, NoteTerms};

fn main() {
    let engine = DiscountEngine::new();

    // rates at or above 50% are outside the scheme
    let result = engine.payment_amount(NoteTerms::new(1_000_000, 100.0, 30, 500));
    match result {
        Err(DiscountError::RateAboveCap { rate }) => {
            println!("rejected: rate {} is at or above the cap", rate);
        }
        other => println!("unexpected: {:?}", other),
    }

    // a zero-day holding period never prices
    let result = engine.payment_amount(NoteTerms::new(1_000_000, 5.0, 0, 500));
    if let Err(err) = result {
        println!("rejected: {}", err);
    }
}
