use std::{any::type_name, mem::size_of};

use nswatch_common::{
	constants::{
		NS_ITEMS_MAX, PROC_EVENT_EXEC, PROC_EVENT_EXIT, PROC_EVENT_FORK, PROC_EVENT_NONE, PROC_EVENT_NS,
	},
	AckProcEvent, CnMsg, ExecProcEvent, ExitProcEvent, ForkProcEvent, NsLegacyProcEvent, NsProcEvent,
	ProcEventHeader,
};
use zerocopy::FromBytes;

use crate::{
	error::{Error, Result},
	event::{Event, EventMeta, IgnoredKind, NsAbi, NsChange, NsKind, NsReason, ProcEvent},
};

/// Decodes the payload of one `NLMSG_DONE` record: connector envelope, event header,
/// then the body selected by the header tag. Unknown tags are not an error.
pub fn decode(payload: &[u8], abi: NsAbi) -> Result<ProcEvent> {
	let (msg, rest) = read::<CnMsg>(payload)?;

	let claimed = msg.len as usize;
	let body = rest.get(..claimed).ok_or(Error::ShortRecord {
		what: "cn_msg payload",
		need: claimed,
		got: rest.len(),
	})?;

	let (header, body) = read::<ProcEventHeader>(body)?;
	let meta = EventMeta {
		cpu: header.cpu,
		timestamp_ns: header.timestamp_ns,
		seq: msg.seq,
		ack: msg.ack,
	};

	let event = match header.what {
		PROC_EVENT_NONE => {
			let (ack, _) = read::<AckProcEvent>(body)?;
			Event::Ack {
				err: ack.err,
				features: msg.flags,
			}
		}
		PROC_EVENT_FORK => {
			let (e, _) = read::<ForkProcEvent>(body)?;
			Event::Fork {
				parent_pid: e.parent_pid,
				parent_tgid: e.parent_tgid,
				child_pid: e.child_pid,
				child_tgid: e.child_tgid,
			}
		}
		PROC_EVENT_EXEC => {
			let (e, _) = read::<ExecProcEvent>(body)?;
			Event::Exec {
				pid: e.process_pid,
				tgid: e.process_tgid,
			}
		}
		PROC_EVENT_EXIT => {
			let (e, _) = read::<ExitProcEvent>(body)?;
			Event::Exit {
				pid: e.process_pid,
				tgid: e.process_tgid,
				exit_code: e.exit_code,
				exit_signal: e.exit_signal,
			}
		}
		PROC_EVENT_NS => match abi {
			NsAbi::Legacy => decode_ns_legacy(body)?,
			NsAbi::Multi => decode_ns_multi(body)?,
		},
		what => match IgnoredKind::from_what(what) {
			Some(kind) => Event::Ignored(kind),
			None => Event::Unrecognized { what },
		},
	};

	Ok(ProcEvent { meta, event })
}

fn decode_ns_legacy(body: &[u8]) -> Result<Event> {
	let (e, _) = read::<NsLegacyProcEvent>(body)?;
	Ok(Event::Namespace {
		tgid: e.process_tgid,
		kind: NsKind::from_code(e.ns_type),
		reason: NsReason::from_code(e.reason),
		old_inum: e.old_inum,
		inum: e.inum,
	})
}

fn decode_ns_multi(body: &[u8]) -> Result<Event> {
	let (e, _) = read::<NsProcEvent>(body)?;
	if e.count as usize > NS_ITEMS_MAX {
		return Err(Error::NsCountOverflow { count: e.count });
	}

	let items = e.items[..e.count as usize]
		.iter()
		.map(|item| NsChange {
			kind: NsKind::from_code(item.item_type),
			flags: item.flags,
			old_inum: item.old_inum,
			inum: item.inum,
		})
		.collect();

	Ok(Event::Namespaces {
		tgid: e.process_tgid,
		reason: NsReason::from_code(e.reason),
		items,
	})
}

/// Copies a `T` off the front of `bytes` (no alignment needed) and returns the rest.
fn read<T: FromBytes>(bytes: &[u8]) -> Result<(T, &[u8])> {
	T::read_from_prefix(bytes).map_err(|_| Error::ShortRecord {
		what: short_name::<T>(),
		need: size_of::<T>(),
		got: bytes.len(),
	})
}

fn short_name<T>() -> &'static str {
	let name = type_name::<T>();
	name.rsplit("::").next().unwrap_or(name)
}

// region:    --- Tests


// endregion: --- Tests
