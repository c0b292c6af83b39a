use std::mem::size_of;
use std::sync::{
	atomic::{AtomicU32, Ordering},
	Arc,
};

use nswatch_common::{
	constants::{
		CN_IDX_PROC, CN_VAL_PROC, NLMSG_DONE, NLMSG_HDRLEN, PROC_CN_GET_FEATURES, PROC_CN_MCAST_IGNORE,
		PROC_CN_MCAST_LISTEN,
	},
	CbId, CnMsg, NetlinkProcMessage, NlMsgHdr,
};
use tracing::debug;
use zerocopy::IntoBytes;

use crate::{error::Result, socket::Transport};

/// Size of one subscription request: header + envelope + action code.
pub const REQUEST_LEN: usize = size_of::<NetlinkProcMessage>() + size_of::<u32>();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	QueryFeatures,
	Listen,
	Ignore,
}

impl Action {
	pub fn code(self) -> u32 {
		match self {
			Action::QueryFeatures => PROC_CN_GET_FEATURES,
			Action::Listen => PROC_CN_MCAST_LISTEN,
			Action::Ignore => PROC_CN_MCAST_IGNORE,
		}
	}
}

/// Request sequence numbers. Never hands out the same value twice.
#[derive(Debug, Default)]
pub struct SeqCounter(AtomicU32);

impl SeqCounter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn next(&self) -> u32 {
		self.0.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
	}

	pub fn current(&self) -> u32 {
		self.0.load(Ordering::Relaxed)
	}
}

#[derive(Debug, Clone)]
pub struct SubscriptionEncoder {
	pid: u32,
	seq: Arc<SeqCounter>,
}

impl SubscriptionEncoder {
	pub fn new(pid: u32) -> Self {
		Self::with_counter(pid, Arc::new(SeqCounter::new()))
	}

	pub fn with_counter(pid: u32, seq: Arc<SeqCounter>) -> Self {
		Self { pid, seq }
	}

	pub fn encode(&self, action: Action) -> Vec<u8> {
		self.encode_seq(action).1
	}

	/// Like `encode`, also returning the sequence number written into the request.
	pub fn encode_seq(&self, action: Action) -> (u32, Vec<u8>) {
		let seq = self.seq.next();
		let op = action.code();

		let msg = NetlinkProcMessage {
			header: NlMsgHdr {
				len: REQUEST_LEN as u32,
				kind: NLMSG_DONE,
				flags: 0,
				seq,
				pid: self.pid,
			},
			data: CnMsg {
				id: CbId {
					idx: CN_IDX_PROC,
					val: CN_VAL_PROC,
				},
				seq,
				ack: 0,
				len: size_of::<u32>() as u16,
				flags: 0,
			},
		};

		let mut buf = Vec::with_capacity(REQUEST_LEN);
		buf.extend_from_slice(msg.as_bytes());
		buf.extend_from_slice(&op.to_le_bytes());
		debug_assert_eq!(buf.len(), NLMSG_HDRLEN + size_of::<CnMsg>() + size_of::<u32>());
		(seq, buf)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscriptionState {
	#[default]
	Unsubscribed,
	Subscribed,
}

/// Channel-wide subscription state as seen from this process.
#[derive(Debug)]
pub struct Subscription {
	encoder: SubscriptionEncoder,
	state: SubscriptionState,
}

impl Subscription {
	pub fn new(encoder: SubscriptionEncoder) -> Self {
		Self {
			encoder,
			state: SubscriptionState::Unsubscribed,
		}
	}

	pub fn state(&self) -> SubscriptionState {
		self.state
	}

	/// Sends `action` and returns the sequence number the request carried.
	pub fn request<T: Transport>(&mut self, transport: &T, action: Action) -> Result<u32> {
		let (seq, msg) = self.encoder.encode_seq(action);
		transport.send(&msg)?;
		debug!("sent {action:?} request (seq {seq})");

		match action {
			Action::Listen => self.state = SubscriptionState::Subscribed,
			Action::Ignore => self.state = SubscriptionState::Unsubscribed,
			Action::QueryFeatures => {}
		}
		Ok(seq)
	}
}

// region:    --- Tests


// endregion: --- Tests
