// region:    --- Modules
mod decode;
mod error;
mod event;
mod frame;
mod receiver;
mod sink;
mod socket;
mod subscription;

#[cfg(test)]
mod support;
// endregion: --- Modules

pub use decode::decode;
pub use error::{Error, Result};
pub use event::{Event, EventMeta, IgnoredKind, NsAbi, NsChange, NsKind, NsReason, ProcEvent};
pub use frame::{split_records, Records};
pub use receiver::Receiver;
pub use sink::EventSink;
pub use socket::{ConnectorSocket, Transport};
pub use subscription::{Action, SeqCounter, Subscription, SubscriptionEncoder, SubscriptionState};
