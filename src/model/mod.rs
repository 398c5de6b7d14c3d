pub mod error;
pub mod fields;
pub mod genre;
pub mod result;
