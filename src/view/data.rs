use std::{collections::HashSet, sync::Arc};

use crate::trade::{Contract, Offer, Trade};

/// Best-height read over the wallet's chain view. The view only ever reads
/// the tip height to render remaining-time fields; confirmation tracking
/// itself stays with the wallet layer.
pub trait ChainHeightSource: Send + Sync {
    fn best_chain_height(&self) -> u32;
}

/// One row of the pending-trades list. Selection hands these to the view
/// model; the trade itself is shared with the engine.
#[derive(Clone)]
pub struct PendingTradesListItem {
    trade: Arc<Trade>,
}

impl PendingTradesListItem {
    pub fn new(trade: Arc<Trade>) -> Self {
        Self { trade }
    }

    pub fn trade(&self) -> &Arc<Trade> {
        &self.trade
    }
}

/// Data the pending-trades view reads: the current selection, the chain tip,
/// and which offers are the local user's own.
pub struct PendingTradesDataModel {
    selected: Option<PendingTradesListItem>,
    chain: Arc<dyn ChainHeightSource>,
    own_offer_ids: HashSet<String>,
}

impl PendingTradesDataModel {
    pub fn new(chain: Arc<dyn ChainHeightSource>) -> Self {
        Self {
            selected: None,
            chain,
            own_offer_ids: HashSet::new(),
        }
    }

    pub fn select(&mut self, item: Option<PendingTradesListItem>) {
        self.selected = item;
    }

    pub fn selected(&self) -> Option<&PendingTradesListItem> {
        self.selected.as_ref()
    }

    pub fn trade(&self) -> Option<&Arc<Trade>> {
        self.selected.as_ref().map(|item| item.trade())
    }

    pub fn offer(&self) -> Option<&Offer> {
        self.trade().map(|trade| trade.offer())
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.trade().and_then(|trade| trade.contract())
    }

    pub fn best_chain_height(&self) -> u32 {
        self.chain.best_chain_height()
    }

    pub fn total_fees(&self) -> u64 {
        self.trade()
            .map(|trade| trade.taker_fee() + trade.tx_fee())
            .unwrap_or(0)
    }

    pub fn lock_time(&self) -> u32 {
        self.trade().map(|trade| trade.lock_time()).unwrap_or(0)
    }

    pub fn open_dispute_time_as_block_height(&self) -> u32 {
        self.trade()
            .map(|trade| trade.open_dispute_time_as_block_height())
            .unwrap_or(0)
    }

    pub fn add_own_offer_id(&mut self, offer_id: impl Into<String>) {
        self.own_offer_ids.insert(offer_id.into());
    }

    pub fn is_offerer(&self, offer: &Offer) -> bool {
        self.own_offer_ids.contains(&offer.offer_id)
    }
}
