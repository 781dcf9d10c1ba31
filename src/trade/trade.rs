use iso_currency::Currency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Contract, Offer};
use crate::common::{observable::StateProperty, types::TradeState};

/// Fiat amount in the currency's minor units (e.g. cents for EUR).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FiatVolume {
    pub amount_minor: u64,
    pub currency: Currency,
}

/// Bitcoin amounts of a trade, all in satoshi.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TradeAmounts {
    pub trade_amount: u64,
    pub payout_amount: u64,
    pub taker_fee: u64,
    pub tx_fee: u64,
}

/// Block-height based deadlines the engine computes when the deposit
/// confirms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TradeTiming {
    pub lock_time: u32,
    pub check_payment_time_as_block_height: u32,
    pub open_dispute_time_as_block_height: u32,
}

/// Read-model of one in-flight trade. The protocol engine owns the trade and
/// advances its life-cycle state through `set_state`; the view layer observes
/// the state property and reads everything else.
pub struct Trade {
    pub trade_uuid: Uuid,
    state: StateProperty<TradeState>,
    offer: Offer,
    contract: Option<Contract>,
    amounts: TradeAmounts,
    volume: FiatVolume,
    timing: TradeTiming,
}

impl Trade {
    pub fn new(
        trade_uuid: Uuid,
        offer: Offer,
        amounts: TradeAmounts,
        volume: FiatVolume,
        timing: TradeTiming,
    ) -> Self {
        Self {
            trade_uuid,
            state: StateProperty::new(TradeState::Preparation),
            offer,
            contract: None,
            amounts,
            volume,
            timing,
        }
    }

    pub fn state_property(&self) -> &StateProperty<TradeState> {
        &self.state
    }

    pub fn state(&self) -> TradeState {
        self.state.get()
    }

    /// Engine entry point. Notifies any active state subscription.
    pub fn set_state(&self, state: TradeState) {
        self.state.set(state);
    }

    pub fn set_contract(&mut self, contract: Contract) {
        self.contract = Some(contract);
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn trade_amount(&self) -> u64 {
        self.amounts.trade_amount
    }

    pub fn payout_amount(&self) -> u64 {
        self.amounts.payout_amount
    }

    pub fn taker_fee(&self) -> u64 {
        self.amounts.taker_fee
    }

    pub fn tx_fee(&self) -> u64 {
        self.amounts.tx_fee
    }

    pub fn trade_volume(&self) -> FiatVolume {
        self.volume.clone()
    }

    pub fn lock_time(&self) -> u32 {
        self.timing.lock_time
    }

    pub fn check_payment_time_as_block_height(&self) -> u32 {
        self.timing.check_payment_time_as_block_height
    }

    pub fn open_dispute_time_as_block_height(&self) -> u32 {
        self.timing.open_dispute_time_as_block_height
    }
}
