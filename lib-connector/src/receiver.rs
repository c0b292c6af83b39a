use tracing::{trace, warn};

use crate::{
	decode::decode,
	error::Result,
	event::NsAbi,
	frame::split_records,
	sink::EventSink,
	socket::Transport,
};

const RECV_BUF_SIZE: usize = 8192;

/// Blocking receive loop: one datagram at a time, decoded and delivered before
/// the next `recv`.
pub struct Receiver<T: Transport> {
	transport: T,
	abi: NsAbi,
	buf: Vec<u8>,
}

impl<T: Transport> Receiver<T> {
	pub fn new(transport: T, abi: NsAbi) -> Self {
		Self {
			transport,
			abi,
			buf: vec![0; RECV_BUF_SIZE],
		}
	}

	/// Runs until the transport or the sink fails, and returns that error.
	pub fn run<S: EventSink>(&mut self, sink: &mut S) -> Result<()> {
		loop {
			self.recv_once(sink)?;
		}
	}

	/// Receives one datagram and delivers every event it carries. Returns the number delivered.
	pub fn recv_once<S: EventSink>(&mut self, sink: &mut S) -> Result<usize> {
		let n = self.transport.recv(&mut self.buf)?;
		trace!("received {n} bytes");

		let mut delivered = 0;
		for record in split_records(&self.buf[..n]) {
			match decode(record, self.abi) {
				Ok(event) => {
					sink.deliver(event)?;
					delivered += 1;
				}
				Err(err) => warn!("skipping malformed record: {err}"),
			}
		}
		Ok(delivered)
	}
}

// region:    --- Tests


// endregion: --- Tests
