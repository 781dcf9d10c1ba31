use serde::{Deserialize, Serialize};

/// Signed trade contract summary. Only the fields the pending-trades screen
/// renders are surfaced here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contract {
    pub payment_method_name: String,
    pub is_buyer_offerer_and_seller_taker: bool,
}
