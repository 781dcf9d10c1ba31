use std::sync::Arc;

use iso_currency::Currency;
use uuid::Uuid;

use pending_trades_view::common::types::{BuySell, FiatPaymentMethod, PaymentMethod};
use pending_trades_view::trade::{Contract, FiatVolume, Offer, Trade, TradeAmounts, TradeTiming};
use pending_trades_view::view::ChainHeightSource;

pub struct FixedChainHeight(pub u32);

impl ChainHeightSource for FixedChainHeight {
    fn best_chain_height(&self) -> u32 {
        self.0
    }
}

pub fn some_offer(offer_id: &str) -> Offer {
    Offer {
        offer_id: offer_id.to_string(),
        direction: BuySell::Sell,
        currency: Currency::EUR,
        payment_method: PaymentMethod::Fiat(FiatPaymentMethod::SepaInstant),
        payment_method_country_code: None,
        max_trade_period: 288,
        lock_time: 10,
    }
}

pub fn some_trade(offer_id: &str) -> Arc<Trade> {
    let mut trade = Trade::new(
        Uuid::new_v4(),
        some_offer(offer_id),
        TradeAmounts {
            trade_amount: 50_000_000,
            payout_amount: 60_000_000,
            taker_fee: 50_000,
            tx_fee: 10_000,
        },
        FiatVolume {
            amount_minor: 1_250_00,
            currency: Currency::EUR,
        },
        TradeTiming {
            lock_time: 10,
            check_payment_time_as_block_height: 800_144,
            open_dispute_time_as_block_height: 800_288,
        },
    );
    trade.set_contract(Contract {
        payment_method_name: "SEPA Instant".to_string(),
        is_buyer_offerer_and_seller_taker: true,
    });
    Arc::new(trade)
}
