//! Wire fixtures and a scripted transport for tests.

use std::{collections::VecDeque, io, mem::size_of, sync::Mutex};

use nswatch_common::{
	constants::{CN_IDX_PROC, CN_VAL_PROC, NLMSG_ALIGNTO, NLMSG_HDRLEN},
	CbId, CnMsg, NlMsgHdr, ProcEventHeader,
};
use zerocopy::IntoBytes;

use crate::{error::Result, socket::Transport};

/// One netlink record with `payload`, padded to the netlink alignment.
pub fn nl_record(kind: u16, payload: &[u8]) -> Vec<u8> {
	let header = NlMsgHdr {
		len: (NLMSG_HDRLEN + payload.len()) as u32,
		kind,
		flags: 0,
		seq: 0,
		pid: 0,
	};
	let mut buf = header.as_bytes().to_vec();
	buf.extend_from_slice(payload);
	while buf.len() % NLMSG_ALIGNTO != 0 {
		buf.push(0);
	}
	buf
}

/// Connector payload (envelope + event header + body) for the given tag.
pub fn proc_payload(what: u32, body: &[u8]) -> Vec<u8> {
	let header = ProcEventHeader {
		what,
		cpu: 3,
		timestamp_ns: 1_000_000,
	};
	let msg = CnMsg {
		id: CbId {
			idx: CN_IDX_PROC,
			val: CN_VAL_PROC,
		},
		seq: 9,
		ack: 0,
		len: (size_of::<ProcEventHeader>() + body.len()) as u16,
		flags: 0,
	};

	let mut buf = msg.as_bytes().to_vec();
	buf.extend_from_slice(header.as_bytes());
	buf.extend_from_slice(body);
	buf
}

enum Step {
	Datagram(Vec<u8>),
	Fail(io::ErrorKind),
}

/// Replays queued datagrams, then fails like a closed socket.
#[derive(Default)]
pub struct MockTransport {
	inbound: Mutex<VecDeque<Step>>,
	sent: Mutex<Vec<Vec<u8>>>,
	fail_send: bool,
}

impl MockTransport {
	pub fn failing_send() -> Self {
		Self {
			fail_send: true,
			..Default::default()
		}
	}

	pub fn push_datagram(&self, datagram: Vec<u8>) {
		self.inbound.lock().unwrap().push_back(Step::Datagram(datagram));
	}

	pub fn push_failure(&self, kind: io::ErrorKind) {
		self.inbound.lock().unwrap().push_back(Step::Fail(kind));
	}

	pub fn sent(&self) -> Vec<Vec<u8>> {
		self.sent.lock().unwrap().clone()
	}
}

impl Transport for MockTransport {
	fn send(&self, buf: &[u8]) -> Result<usize> {
		if self.fail_send {
			return Err(io::Error::from(io::ErrorKind::BrokenPipe).into());
		}
		self.sent.lock().unwrap().push(buf.to_vec());
		Ok(buf.len())
	}

	fn recv(&self, buf: &mut [u8]) -> Result<usize> {
		match self.inbound.lock().unwrap().pop_front() {
			Some(Step::Datagram(data)) => {
				let n = data.len().min(buf.len());
				buf[..n].copy_from_slice(&data[..n]);
				Ok(n)
			}
			Some(Step::Fail(kind)) => Err(io::Error::from(kind).into()),
			None => Err(io::Error::from(io::ErrorKind::NotConnected).into()),
		}
	}
}
