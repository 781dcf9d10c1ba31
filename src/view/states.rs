use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

// The buyer and seller run asymmetric sub-protocols over the same shared
// life-cycle, so each role gets its own display enumeration instead of a
// second engine-side life-cycle. Derived only; never set by user action.

#[derive(
    Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug, Default, Display, IntoStaticStr,
)]
pub enum BuyerState {
    #[default]
    Undefined,
    WaitForBlockchainConfirmation,
    RequestStartFiatPayment,
    WaitForFiatPaymentReceipt,
    WaitForBroadcastAfterUnlock,
    RequestWithdrawal,
}

#[derive(
    Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug, Default, Display, IntoStaticStr,
)]
pub enum SellerState {
    #[default]
    Undefined,
    WaitForBlockchainConfirmation,
    WaitForFiatPaymentStarted,
    RequestConfirmFiatPaymentReceived,
    WaitForPayoutTx,
    WaitForBroadcastAfterUnlock,
    RequestWithdrawal,
}
