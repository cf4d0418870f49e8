pub mod discount;
pub mod errors;
pub mod types;

// re-export key types
pub use discount::{DiscountEngine, MONTH_BASIS_DAYS, RATE_CAP_PERCENT};
pub use errors::{DiscountError, Result};
pub use types::{DiscountQuote, NoteTerms, NoteTermsBuilder};
