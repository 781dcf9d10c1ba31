pub mod error;
pub mod observable;
pub mod types;
