pub mod display;
pub mod error;
pub mod hostel;
pub mod parser;

pub use error::{Error, Result};
