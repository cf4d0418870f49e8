/// json quote - serialize a full payout breakdown
use note_discount::{DiscountEngine, NoteTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = NoteTerms::new(39_600_000, 1.7, 93, 4_000);

    let quote = DiscountEngine::new().quote(terms)?;
    println!("{}", quote.json());

    Ok(())
}
