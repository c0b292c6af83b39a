use lib_connector::{EventSink, ProcEvent};
use tracing::trace;

use crate::Result;

pub fn new_channel<T>(name: &'static str) -> (Tx<T>, Rx<T>) {
	let (tx, rx) = flume::unbounded();

	(Tx(tx, name), Rx(rx, name))
}

pub struct Tx<T>(flume::Sender<T>, &'static str);

impl<T> Tx<T> {
	pub fn name(&self) -> &'static str {
		self.1
	}
}

/// The receive thread pushes into the channel without blocking on the consumer.
impl EventSink for Tx<ProcEvent> {
	fn deliver(&mut self, event: ProcEvent) -> lib_connector::Result<()> {
		trace!("{}: {:?}", self.name(), event.event);
		self.0.send(event).map_err(|_| lib_connector::Error::SinkClosed)
	}
}

pub struct Rx<T>(flume::Receiver<T>, &'static str);

impl<T> Rx<T> {
	pub async fn recv(&self) -> Result<T> {
		let res = self.0.recv_async().await?;
		Ok(res)
	}

	pub fn name(&self) -> &'static str {
		self.1
	}
}

// region:    --- Tests


// endregion: --- Tests
