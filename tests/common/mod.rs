pub mod logger;
pub mod test_trades;
