use nswatch_common::{
	constants::{NLMSG_ALIGNTO, NLMSG_DONE, NLMSG_ERROR, NLMSG_HDRLEN},
	NlMsgHdr,
};
use tracing::{debug, trace, warn};
use zerocopy::FromBytes;

/// Lazily walks the netlink records of one datagram, yielding the payload of every
/// `NLMSG_DONE` record. Anything shorter than a header yields nothing.
pub fn split_records(buf: &[u8]) -> Records<'_> {
	Records { buf }
}

pub struct Records<'a> {
	buf: &'a [u8],
}

impl<'a> Iterator for Records<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		while self.buf.len() >= NLMSG_HDRLEN {
			let Ok((header, _)) = NlMsgHdr::read_from_prefix(self.buf) else {
				break;
			};

			let len = header.len as usize;
			if len < NLMSG_HDRLEN || len > self.buf.len() {
				warn!("truncated netlink record (len {len}, {} bytes left)", self.buf.len());
				break;
			}

			let payload = &self.buf[NLMSG_HDRLEN..len];
			let advance = align(len).min(self.buf.len());
			self.buf = &self.buf[advance..];

			match header.kind {
				NLMSG_DONE => return Some(payload),
				NLMSG_ERROR => debug!("dropping netlink error record (seq {})", header.seq),
				kind => trace!("dropping netlink record type {kind}"),
			}
		}

		self.buf = &[];
		None
	}
}

fn align(len: usize) -> usize {
	(len + NLMSG_ALIGNTO - 1) & !(NLMSG_ALIGNTO - 1)
}

// region:    --- Tests


// endregion: --- Tests
