mod contract;
mod offer;
mod trade;

pub use contract::Contract;
pub use offer::Offer;
pub use trade::{FiatVolume, Trade, TradeAmounts, TradeTiming};
