//! Error types for hostel-dada

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A purchase asked for more units than the cart holds
    #[error("not enough stock of {name}: {requested} requested, {available} left")]
    OutOfStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// A purchase named a snack that is not in the cart
    #[error("unknown snack: {0}")]
    UnknownSnack(String),

    /// A booking overlaps an existing laundry slot
    #[error("slot {start}:00-{end}:00 clashes with an existing booking")]
    SlotConflict { start: u32, end: u32 },

    /// A booking where the start hour is not before the end hour
    #[error("invalid slot: start hour {start} must be before end hour {end}")]
    InvalidInterval { start: u32, end: u32 },

    /// Menu selection outside the valid range
    #[error("invalid option: {0}")]
    InvalidChoice(String),

    /// A seed table failed to parse
    #[error("seed table error: {0}")]
    Csv(#[from] csv::Error),

    /// A seed date failed to parse
    #[error("seed date error: {0}")]
    Date(#[from] chrono::ParseError),
}
