use iso_currency::Currency;
use serde::{Deserialize, Serialize};

use crate::common::types::{BuySell, PaymentMethod};

pub type OfferIdString = String;

/// Read-side view of the offer a trade was taken from. Authored and
/// published by the offer-book layer; the pending-trades screen only reads
/// payment rail and period parameters off it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: OfferIdString,
    pub direction: BuySell,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    pub payment_method_country_code: Option<String>,

    /// Maximum allowed trade period for the payment rail, in blocks.
    pub max_trade_period: u32,
    /// Payout transaction lock time for the payment rail, in blocks.
    pub lock_time: u32,
}
