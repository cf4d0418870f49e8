use serde::{Deserialize, Serialize};

use crate::discount::DiscountEngine;
use crate::errors::{DiscountError, Result};

/// terms of a single note discounting transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteTerms {
    /// face value of the promissory note being discounted
    pub note_amount: i64,
    /// percentage rate prorated over the holding period
    pub interest_rate: f64,
    /// days the note is held before settlement
    pub duration_days: i64,
    /// flat fee deducted from the payout
    pub charge: i64,
}

impl NoteTerms {
    pub fn new(note_amount: i64, interest_rate: f64, duration_days: i64, charge: i64) -> Self {
        Self {
            note_amount,
            interest_rate,
            duration_days,
            charge,
        }
    }

    pub fn builder() -> NoteTermsBuilder {
        NoteTermsBuilder::new()
    }
}

/// fluent builder for note terms, validated on build
#[derive(Debug, Default)]
pub struct NoteTermsBuilder {
    note_amount: Option<i64>,
    interest_rate: Option<f64>,
    duration_days: Option<i64>,
    charge: Option<i64>,
}

impl NoteTermsBuilder {
    pub fn new() -> Self {
        Self {
            note_amount: None,
            interest_rate: None,
            duration_days: None,
            charge: None,
        }
    }

    pub fn note_amount(mut self, amount: i64) -> Self {
        self.note_amount = Some(amount);
        self
    }

    pub fn interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn duration_days(mut self, days: i64) -> Self {
        self.duration_days = Some(days);
        self
    }

    pub fn charge(mut self, charge: i64) -> Self {
        self.charge = Some(charge);
        self
    }

    /// build the terms, rejecting unset fields and invalid values
    pub fn build(self) -> Result<NoteTerms> {
        let terms = NoteTerms {
            note_amount: self
                .note_amount
                .ok_or(DiscountError::MissingTerm { field: "note_amount" })?,
            interest_rate: self
                .interest_rate
                .ok_or(DiscountError::MissingTerm { field: "interest_rate" })?,
            duration_days: self
                .duration_days
                .ok_or(DiscountError::MissingTerm { field: "duration_days" })?,
            charge: self
                .charge
                .ok_or(DiscountError::MissingTerm { field: "charge" })?,
        };

        DiscountEngine::new().validate(&terms)?;
        Ok(terms)
    }
}

/// breakdown of a discounting payout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountQuote {
    pub note_amount: i64,
    pub interest: i64,
    pub charge: i64,
    pub payment_amount: i64,
    pub duration_days: i64,
}

impl DiscountQuote {
    /// get json representation of the quote
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}
