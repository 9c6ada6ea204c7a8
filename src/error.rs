use thiserror::Error;

/// Everything that can go wrong while running a pattern demo.
///
/// None of these are retried: a demo either completes or reports the error
/// and stops.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("no product named '{0}' can be produced")]
    UnknownProduct(String),

    #[error("order for '{item}' was rejected")]
    OrderRejected { item: String },

    #[error("payment for '{item}' was declined")]
    PaymentDeclined { item: String },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serialization(#[from] bincode::Error),
}

impl PatternError {
    pub fn order_rejected(item: impl Into<String>) -> Self {
        Self::OrderRejected { item: item.into() }
    }

    pub fn payment_declined(item: impl Into<String>) -> Self {
        Self::PaymentDeclined { item: item.into() }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
