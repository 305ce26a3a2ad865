//! Bot layer: inbound events, the command dispatcher and the
//! pending-interaction tracker for multi-turn edits.

pub mod dispatcher;
pub mod event;
pub mod pending;
pub mod replies;

pub use dispatcher::Dispatcher;
pub use event::{Choice, Event, Reply};
pub use pending::PendingInteractions;
