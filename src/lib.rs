pub mod common;
pub mod trade;
pub mod view;
