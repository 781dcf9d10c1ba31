use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{
    data::{PendingTradesDataModel, PendingTradesListItem},
    formatter::Formatter,
    projector::{project, Projection},
    states::{BuyerState, SellerState},
};
use crate::{
    common::{
        error::ViewModelError,
        observable::{StateProperty, Subscription},
        types::{PaymentMethod, TradeState},
    },
    trade::Trade,
};

/// Projected (seller, buyer) pair, published after every life-cycle event
/// handled for the selected trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateNotif {
    pub seller_state: SellerState,
    pub buyer_state: BuyerState,
}

/// Destination for the projector's defensive warning. Injected so callers
/// can capture diagnostics instead of going through the process-wide
/// subscriber.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Default sink, forwards to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// View model for the pending-trades screen. Observes the selected trade's
/// life-cycle state and publishes the two role-scoped display states plus
/// the formatted fields the screen binds to.
pub struct PendingTradesViewModel {
    data: PendingTradesDataModel,
    formatter: Formatter,
    security_deposit: u64,

    buyer_state: StateProperty<BuyerState>,
    seller_state: StateProperty<SellerState>,
    trade_state_subscription: Option<Subscription>,
    notif_tx: Arc<Mutex<Option<mpsc::UnboundedSender<StateNotif>>>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl PendingTradesViewModel {
    pub fn new(data: PendingTradesDataModel, formatter: Formatter, security_deposit: u64) -> Self {
        Self::with_sink(data, formatter, security_deposit, Arc::new(TracingSink))
    }

    pub fn with_sink(
        data: PendingTradesDataModel,
        formatter: Formatter,
        security_deposit: u64,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            data,
            formatter,
            security_deposit,
            buyer_state: StateProperty::new(BuyerState::Undefined),
            seller_state: StateProperty::new(SellerState::Undefined),
            trade_state_subscription: None,
            notif_tx: Arc::new(Mutex::new(None)),
            sink,
        }
    }

    /// Re-targets the life-cycle subscription. The old subscription is
    /// cancelled before the new one attaches, so a stale trade's events can
    /// never overwrite the current display states. Subscribing replays the
    /// new trade's current state immediately.
    pub fn on_selected_item_changed(&mut self, selected_item: Option<&PendingTradesListItem>) {
        if let Some(subscription) = self.trade_state_subscription.take() {
            subscription.cancel();
        }

        self.data.select(selected_item.cloned());

        if let Some(item) = selected_item {
            let trade = item.trade();
            let trade_uuid = trade.trade_uuid;
            let seller_state = self.seller_state.clone();
            let buyer_state = self.buyer_state.clone();
            let notif_tx = self.notif_tx.clone();
            let sink = self.sink.clone();

            let subscription = trade.state_property().subscribe(move |trade_state| {
                Self::on_trade_state_changed(
                    *trade_state,
                    trade_uuid,
                    &seller_state,
                    &buyer_state,
                    &notif_tx,
                    sink.as_ref(),
                );
            });
            self.trade_state_subscription = Some(subscription);
        }
    }

    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.trade_state_subscription.take() {
            subscription.cancel();
        }
    }

    fn on_trade_state_changed(
        trade_state: TradeState,
        trade_uuid: Uuid,
        seller_state: &StateProperty<SellerState>,
        buyer_state: &StateProperty<BuyerState>,
        notif_tx: &Mutex<Option<mpsc::UnboundedSender<StateNotif>>>,
        sink: &dyn DiagnosticSink,
    ) {
        debug!(
            "Trade w/ TradeUUID {} life-cycle state changed to {}",
            trade_uuid, trade_state
        );

        match project(trade_state) {
            Projection::Update { seller, buyer } => {
                if let Some(state) = seller {
                    seller_state.set(state);
                }
                if let Some(state) = buyer {
                    buyer_state.set(state);
                }
            }
            Projection::Unrecognized => {
                seller_state.set(SellerState::Undefined);
                buyer_state.set(BuyerState::Undefined);
                sink.warn(&format!(
                    "Trade w/ TradeUUID {} reported unhandled life-cycle state {}",
                    trade_uuid, trade_state
                ));
            }
        }

        let notif = StateNotif {
            seller_state: seller_state.get(),
            buyer_state: buyer_state.get(),
        };
        let mut notif_tx = notif_tx.lock().unwrap();
        if let Some(tx) = notif_tx.as_ref() {
            if let Some(error) = tx.send(notif).err().map(ViewModelError::from) {
                // Receiver dropped; free the slot so the UI can re-register
                *notif_tx = None;
                sink.warn(&format!(
                    "Trade w/ TradeUUID {} state notif channel closed, unregistering - {}",
                    trade_uuid, error
                ));
            }
        }
    }

    // Published display states

    pub fn buyer_state(&self) -> BuyerState {
        self.buyer_state.get()
    }

    pub fn seller_state(&self) -> SellerState {
        self.seller_state.get()
    }

    pub fn subscribe_buyer_state(
        &self,
        listener: impl FnMut(&BuyerState) + Send + 'static,
    ) -> Subscription {
        self.buyer_state.subscribe(listener)
    }

    pub fn subscribe_seller_state(
        &self,
        listener: impl FnMut(&SellerState) + Send + 'static,
    ) -> Subscription {
        self.seller_state.subscribe(listener)
    }

    pub fn register_notif_tx(
        &self,
        tx: mpsc::UnboundedSender<StateNotif>,
    ) -> Result<(), ViewModelError> {
        let mut notif_tx = self.notif_tx.lock().unwrap();
        if notif_tx.is_some() {
            return Err(ViewModelError::Simple(
                "PendingTradesViewModel already have notif_tx registered".to_string(),
            ));
        }
        *notif_tx = Some(tx);
        Ok(())
    }

    pub fn unregister_notif_tx(&self) {
        *self.notif_tx.lock().unwrap() = None;
    }

    // Data model access

    pub fn data(&self) -> &PendingTradesDataModel {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut PendingTradesDataModel {
        &mut self.data
    }

    pub fn best_chain_height(&self) -> u32 {
        self.data.best_chain_height()
    }

    pub fn lock_time(&self) -> u32 {
        self.data.lock_time()
    }

    // Formatted display fields. Missing trade, offer or contract renders as
    // an empty string, never as an error.

    pub fn payout_amount(&self) -> String {
        self.data
            .trade()
            .map(|trade| self.formatter.format_btc_with_code(trade.payout_amount()))
            .unwrap_or_default()
    }

    pub fn remaining_time(&self) -> String {
        self.data
            .trade()
            .map(|trade| {
                self.formatter.period_between_block_heights(
                    self.data.best_chain_height(),
                    trade.open_dispute_time_as_block_height(),
                )
            })
            .unwrap_or_default()
    }

    pub fn remaining_time_as_percentage(&self) -> f64 {
        match (self.data.trade(), self.data.offer()) {
            (Some(trade), Some(offer)) => {
                let remaining_blocks = f64::from(trade.open_dispute_time_as_block_height())
                    - f64::from(self.data.best_chain_height());
                let max_period = f64::from(offer.max_trade_period);
                if max_period != 0.0 {
                    1.0 - remaining_blocks / max_period
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn show_warning(&self, trade: &Trade) -> bool {
        self.data.best_chain_height() >= trade.check_payment_time_as_block_height()
    }

    pub fn show_dispute(&self, trade: &Trade) -> bool {
        self.data.best_chain_height() >= trade.open_dispute_time_as_block_height()
    }

    pub fn my_role(&self, item: &PendingTradesListItem) -> String {
        let trade = item.trade();
        match trade.contract() {
            Some(contract) => self.formatter.role(
                contract.is_buyer_offerer_and_seller_taker,
                self.data.is_offerer(trade.offer()),
            ),
            None => String::new(),
        }
    }

    /// Payment method of the selected trade's contract.
    pub fn payment_method(&self) -> String {
        self.data
            .contract()
            .map(|contract| contract.payment_method_name.clone())
            .unwrap_or_default()
    }

    /// Payment method of a list row's offer, with country code when the
    /// rail is country-scoped.
    pub fn payment_method_for(&self, item: &PendingTradesListItem) -> String {
        let offer = item.trade().offer();
        let method = match offer.payment_method {
            PaymentMethod::Fiat(fiat_method) => fiat_method.to_string(),
            PaymentMethod::Blockchain => PaymentMethod::Blockchain.to_string(),
        };
        match &offer.payment_method_country_code {
            Some(country_code) => format!("{} ({})", method, country_code),
            None => method,
        }
    }

    pub fn fiat_amount(&self) -> String {
        self.data
            .trade()
            .map(|trade| self.formatter.format_fiat_with_code(&trade.trade_volume()))
            .unwrap_or_default()
    }

    pub fn trade_volume(&self) -> String {
        self.data
            .trade()
            .map(|trade| self.formatter.format_btc_with_code(trade.trade_amount()))
            .unwrap_or_default()
    }

    pub fn fiat_volume(&self) -> String {
        self.fiat_amount()
    }

    pub fn total_fees(&self) -> String {
        self.formatter.format_btc_with_code(self.data.total_fees())
    }

    pub fn security_deposit(&self) -> String {
        self.formatter.format_btc_with_code(self.security_deposit)
    }

    pub fn is_blockchain_method(&self) -> bool {
        self.data
            .offer()
            .map(|offer| offer.payment_method.is_blockchain())
            .unwrap_or(false)
    }

    pub fn open_dispute_time_as_formatted_date(&self) -> String {
        match self.data.offer() {
            Some(offer) => {
                let blocks = self
                    .data
                    .open_dispute_time_as_block_height()
                    .saturating_sub(self.data.best_chain_height())
                    .saturating_add(offer.lock_time);
                self.formatter.blocks_to_now_date_formatted(blocks)
            }
            None => String::new(),
        }
    }
}
