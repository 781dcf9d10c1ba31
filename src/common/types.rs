use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Engine-maintained progress marker for a single trade. Advanced by the
/// trade protocol engine, only ever forward. The pending-trades view never
/// sets this; it only observes it.
///
/// `Failed` belongs to the failed-trades screen and is outside the
/// pending-trades display mapping. The enum is non-exhaustive so the engine
/// can grow states without breaking downstream matches.
#[non_exhaustive]
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug, EnumString, Display,
    IntoStaticStr,
)]
pub enum TradeState {
    Preparation,
    TakerFeePaid,
    DepositPublishRequested,
    DepositPublished,
    DepositSeenInNetwork,
    DepositPublishedMsgSent,
    DepositPublishedMsgReceived,
    DepositConfirmed,
    FiatPaymentStarted,
    FiatPaymentStartedMsgSent,
    FiatPaymentStartedMsgReceived,
    FiatPaymentReceipt,
    FiatPaymentReceiptMsgSent,
    FiatPaymentReceiptMsgReceived,
    PayoutTxSent,
    PayoutTxReceived,
    PayoutTxCommitted,
    PayoutBroadcasted,
    WithdrawCompleted,
    Failed,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug, Display, IntoStaticStr)]
pub enum BuySell {
    Buy,
    Sell,
}

#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug, EnumString, Display,
    IntoStaticStr,
)]
pub enum FiatPaymentMethod {
    Uphold,
    Revolut,
    Sepa,
    SepaInstant,
    FasterPayments,
    NationalBank,
    JapanBank,
    AustraliaPayID,
    Swish,
    AliPay,
    WeChatPay,
    Zelle,
    InteracETransfer,
    USPostalMoneyOrder,
    CashDeposit,
    MoneyGram,
    WesternUnion,
    FaceToFace,
    HalCash,
    SWIFT,
    ACHTransfer,
    DomesticWireTransfer,
    CashApp,
    Venmo,
}

/// Settlement rail declared on the offer. Altcoin-for-bitcoin trades settle
/// on chain without a fiat leg, which changes what the pending-trades screen
/// instructs the user to do.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Debug, Display, IntoStaticStr)]
pub enum PaymentMethod {
    Fiat(FiatPaymentMethod),
    Blockchain,
}

impl PaymentMethod {
    pub fn is_blockchain(&self) -> bool {
        matches!(self, PaymentMethod::Blockchain)
    }
}
