mod data;
mod formatter;
mod projector;
mod states;
mod view_model;

pub use data::{ChainHeightSource, PendingTradesDataModel, PendingTradesListItem};
pub use formatter::Formatter;
pub use states::{BuyerState, SellerState};
pub use view_model::{DiagnosticSink, PendingTradesViewModel, StateNotif, TracingSink};
