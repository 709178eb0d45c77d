use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    Invalid(String),

    #[error("Too many decimal places: {got} (maximum {max})")]
    TooManyDecimals { got: usize, max: usize },

    #[error("Amount overflow")]
    Overflow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address cannot be empty")]
    Empty,
}
