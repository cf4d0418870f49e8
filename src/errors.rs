use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscountError {
    #[error("interest rate must be non-negative: {rate}")]
    RateNegative {
        rate: f64,
    },

    #[error("interest rate must be under 50%: {rate}")]
    RateAboveCap {
        rate: f64,
    },

    #[error("charge must be non-negative: {charge}")]
    ChargeNegative {
        charge: i64,
    },

    #[error("duration must be at least one day: {days}")]
    DurationTooShort {
        days: i64,
    },

    #[error("missing term: {field}")]
    MissingTerm {
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DiscountError>;
