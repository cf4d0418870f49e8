use crate::errors::{DiscountError, Result};
use crate::types::{DiscountQuote, NoteTerms};

/// the proration basis: one month is counted as 30 days
pub const MONTH_BASIS_DAYS: f64 = 30.0;

/// rates at or above this percentage are rejected
pub const RATE_CAP_PERCENT: f64 = 50.0;

/// engine for pricing a note discounting transaction
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountEngine;

impl DiscountEngine {
    pub fn new() -> Self {
        Self
    }

    /// check the terms against the scheme preconditions
    ///
    /// the face amount is not checked: zero and negative notes are priced
    /// as-is and can produce a negative payout
    pub fn validate(&self, terms: &NoteTerms) -> Result<()> {
        if terms.interest_rate < 0.0 {
            return Err(DiscountError::RateNegative {
                rate: terms.interest_rate,
            });
        }
        if terms.interest_rate >= RATE_CAP_PERCENT {
            return Err(DiscountError::RateAboveCap {
                rate: terms.interest_rate,
            });
        }
        if terms.charge < 0 {
            return Err(DiscountError::ChargeNegative {
                charge: terms.charge,
            });
        }
        if terms.duration_days < 1 {
            return Err(DiscountError::DurationTooShort {
                days: terms.duration_days,
            });
        }
        Ok(())
    }

    /// price the transaction and break out interest and charge
    pub fn quote(&self, terms: NoteTerms) -> Result<DiscountQuote> {
        self.validate(&terms)?;

        let interest = accrued_interest(terms.note_amount, terms.interest_rate, terms.duration_days);

        Ok(DiscountQuote {
            note_amount: terms.note_amount,
            interest,
            charge: terms.charge,
            payment_amount: terms.note_amount - interest - terms.charge,
            duration_days: terms.duration_days,
        })
    }

    /// net amount disbursed after interest and charge are deducted
    pub fn payment_amount(&self, terms: NoteTerms) -> Result<i64> {
        Ok(self.quote(terms)?.payment_amount)
    }
}

/// simple interest prorated linearly by day count on a 30-day month basis,
/// rounded to the nearest unit with half fractions away from zero
fn accrued_interest(note_amount: i64, interest_rate: f64, duration_days: i64) -> i64 {
    let interest =
        note_amount as f64 / MONTH_BASIS_DAYS * duration_days as f64 * interest_rate / 100.0;
    interest.round() as i64
}
