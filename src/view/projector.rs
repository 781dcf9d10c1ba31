use super::states::{BuyerState, SellerState};
use crate::common::types::TradeState;

/// Outcome of projecting one life-cycle state onto the two role displays.
/// `None` means the role keeps its current display state; intermediate
/// transport acknowledgements deliberately leave one side untouched to avoid
/// flickering the instructions shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Projection {
    Update {
        seller: Option<SellerState>,
        buyer: Option<BuyerState>,
    },
    Unrecognized,
}

/// Maps the engine's life-cycle state to the per-role display states. Pure
/// and total; the caller owns logging and publication.
pub(super) fn project(trade_state: TradeState) -> Projection {
    use TradeState::*;

    match trade_state {
        Preparation => Projection::Update {
            seller: Some(SellerState::Undefined),
            buyer: Some(BuyerState::Undefined),
        },

        TakerFeePaid | DepositPublishRequested => Projection::Update {
            seller: None,
            buyer: None,
        },

        DepositPublished | DepositSeenInNetwork | DepositPublishedMsgSent
        | DepositPublishedMsgReceived => Projection::Update {
            seller: Some(SellerState::WaitForBlockchainConfirmation),
            buyer: Some(BuyerState::WaitForBlockchainConfirmation),
        },

        DepositConfirmed => Projection::Update {
            seller: Some(SellerState::WaitForFiatPaymentStarted),
            buyer: Some(BuyerState::RequestStartFiatPayment),
        },

        FiatPaymentStarted | FiatPaymentStartedMsgSent => Projection::Update {
            seller: None,
            buyer: Some(BuyerState::WaitForFiatPaymentReceipt),
        },
        FiatPaymentStartedMsgReceived => Projection::Update {
            seller: Some(SellerState::RequestConfirmFiatPaymentReceived),
            buyer: None,
        },

        FiatPaymentReceipt | FiatPaymentReceiptMsgReceived => Projection::Update {
            seller: None,
            buyer: None,
        },
        FiatPaymentReceiptMsgSent => Projection::Update {
            seller: Some(SellerState::WaitForPayoutTx),
            buyer: Some(BuyerState::WaitForFiatPaymentReceipt),
        },

        PayoutTxSent => Projection::Update {
            seller: None,
            buyer: Some(BuyerState::WaitForBroadcastAfterUnlock),
        },
        PayoutTxReceived | PayoutTxCommitted => Projection::Update {
            seller: Some(SellerState::WaitForBroadcastAfterUnlock),
            buyer: None,
        },
        PayoutBroadcasted => Projection::Update {
            seller: Some(SellerState::RequestWithdrawal),
            buyer: Some(BuyerState::RequestWithdrawal),
        },

        WithdrawCompleted => Projection::Update {
            seller: Some(SellerState::Undefined),
            buyer: Some(BuyerState::Undefined),
        },

        // Failed trades move to their own screen; anything else is a state
        // this view does not know yet.
        _ => Projection::Unrecognized,
    }
}
