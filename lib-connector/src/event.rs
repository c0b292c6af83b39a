use std::fmt;

use nswatch_common::constants::{
	CLONE_NEWIPC, CLONE_NEWNET, CLONE_NEWNS, CLONE_NEWPID, CLONE_NEWUSER, CLONE_NEWUTS, PROC_EVENT_COMM,
	PROC_EVENT_COREDUMP, PROC_EVENT_GID, PROC_EVENT_PTRACE, PROC_EVENT_SID, PROC_EVENT_UID,
};

/// Wire layout used by the kernel for `PROC_EVENT_NS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NsAbi {
	/// One transition per event: type, reason, old and new inode.
	Legacy,
	/// Reason plus up to seven (type, flags, old, new) items.
	#[default]
	Multi,
}

/// A decoded notification together with the envelope/header fields it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcEvent {
	pub meta: EventMeta,
	pub event: Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMeta {
	pub cpu: u32,
	pub timestamp_ns: u64,
	pub seq: u32,
	pub ack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// `PROC_EVENT_NONE`: acknowledgement of a control request. `features` carries the
	/// envelope flags, which is where the kernel reports the feature bitmask.
	Ack { err: u32, features: u16 },
	Fork {
		parent_pid: u32,
		parent_tgid: u32,
		child_pid: u32,
		child_tgid: u32,
	},
	Exec { pid: u32, tgid: u32 },
	Exit {
		pid: u32,
		tgid: u32,
		exit_code: u32,
		exit_signal: u32,
	},
	/// Legacy single-item namespace notification.
	Namespace {
		tgid: u32,
		kind: NsKind,
		reason: NsReason,
		old_inum: u64,
		inum: u64,
	},
	/// Multi-item namespace notification, `items.len()` equals the wire count.
	Namespaces {
		tgid: u32,
		reason: NsReason,
		items: Vec<NsChange>,
	},
	Ignored(IgnoredKind),
	Unrecognized { what: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NsChange {
	pub kind: NsKind,
	pub flags: u32,
	pub old_inum: u64,
	pub inum: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsKind {
	Pid,
	Mnt,
	Net,
	Uts,
	Ipc,
	User,
	Unknown(u32),
}

impl NsKind {
	pub fn from_code(code: u32) -> Self {
		match code {
			CLONE_NEWPID => NsKind::Pid,
			CLONE_NEWNS => NsKind::Mnt,
			CLONE_NEWNET => NsKind::Net,
			CLONE_NEWUTS => NsKind::Uts,
			CLONE_NEWIPC => NsKind::Ipc,
			CLONE_NEWUSER => NsKind::User,
			other => NsKind::Unknown(other),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			NsKind::Pid => "pid",
			NsKind::Mnt => "mnt",
			NsKind::Net => "net",
			NsKind::Uts => "uts",
			NsKind::Ipc => "ipc",
			NsKind::User => "user",
			NsKind::Unknown(_) => "unknown",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsReason {
	Clone,
	Setns,
	Unshare,
	Unknown(u32),
}

impl NsReason {
	pub fn from_code(code: u32) -> Self {
		match code {
			1 => NsReason::Clone,
			2 => NsReason::Setns,
			3 => NsReason::Unshare,
			other => NsReason::Unknown(other),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			NsReason::Clone => "clone",
			NsReason::Setns => "setns",
			NsReason::Unshare => "unshare",
			NsReason::Unknown(_) => "unknown",
		}
	}
}

/// Event kinds that are recognized but whose payload is not surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredKind {
	Uid,
	Gid,
	Sid,
	Ptrace,
	Comm,
	Coredump,
}

impl IgnoredKind {
	pub fn from_what(what: u32) -> Option<Self> {
		let kind = match what {
			PROC_EVENT_UID => IgnoredKind::Uid,
			PROC_EVENT_GID => IgnoredKind::Gid,
			PROC_EVENT_SID => IgnoredKind::Sid,
			PROC_EVENT_PTRACE => IgnoredKind::Ptrace,
			PROC_EVENT_COMM => IgnoredKind::Comm,
			PROC_EVENT_COREDUMP => IgnoredKind::Coredump,
			_ => return None,
		};
		Some(kind)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			IgnoredKind::Uid => "uid",
			IgnoredKind::Gid => "gid",
			IgnoredKind::Sid => "sid",
			IgnoredKind::Ptrace => "ptrace",
			IgnoredKind::Comm => "comm",
			IgnoredKind::Coredump => "coredump",
		}
	}
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Event::Ack { err, features } => write!(f, "none: err={err} flags={features}"),
			Event::Fork {
				parent_tgid, child_tgid, ..
			} => write!(f, "fork: ppid={parent_tgid} pid={child_tgid}"),
			Event::Exec { tgid, .. } => write!(f, "exec: pid={tgid}"),
			Event::Exit {
				tgid,
				exit_code,
				exit_signal,
				..
			} => write!(f, "exit: pid={tgid} code={exit_code} signal={exit_signal}"),
			Event::Namespace {
				tgid,
				kind,
				reason,
				old_inum,
				inum,
			} => write!(
				f,
				"nm: pid={tgid} type={} reason={} old_inum={old_inum} inum={inum}",
				kind.as_str(),
				reason.as_str()
			),
			Event::Namespaces { tgid, reason, items } => {
				write!(f, "ns: pid={tgid} reason={} count={}", reason.as_str(), items.len())?;
				for item in items {
					write!(f, "\n    type={:<4} {} -> {}", item.kind.as_str(), item.old_inum, item.inum)?;
				}
				Ok(())
			}
			Event::Ignored(kind) => write!(f, "{}: ignored", kind.as_str()),
			Event::Unrecognized { what } => write!(f, "???: what={what:x}"),
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn ns_codes_map_to_symbols() -> Result<()> {
		// -- Setup & Fixtures
		let fx_cases = [
			(CLONE_NEWPID, "pid"),
			(CLONE_NEWNS, "mnt"),
			(CLONE_NEWNET, "net"),
			(CLONE_NEWUTS, "uts"),
			(CLONE_NEWIPC, "ipc"),
			(CLONE_NEWUSER, "user"),
			(0x02000000, "unknown"),
		];

		// -- Exec & Check
		for (code, name) in fx_cases {
			assert_eq!(NsKind::from_code(code).as_str(), name);
		}
		assert_eq!(NsReason::from_code(2), NsReason::Setns);
		assert_eq!(NsReason::from_code(0).as_str(), "unknown");
		assert_eq!(NsReason::from_code(4), NsReason::Unknown(4));

		Ok(())
	}

	#[test]
	fn render_multi_namespace_lines() -> Result<()> {
		// -- Setup & Fixtures
		let fx_event = Event::Namespaces {
			tgid: 42,
			reason: NsReason::Unshare,
			items: vec![
				NsChange {
					kind: NsKind::Net,
					flags: 0,
					old_inum: 1,
					inum: 2,
				},
				NsChange {
					kind: NsKind::User,
					flags: 0,
					old_inum: 3,
					inum: 4,
				},
			],
		};

		// -- Exec
		let text = fx_event.to_string();

		// -- Check
		assert_eq!(
			text,
			"ns: pid=42 reason=unshare count=2\n    type=net  1 -> 2\n    type=user 3 -> 4"
		);

		Ok(())
	}

	#[test]
	fn render_single_line_kinds() -> Result<()> {
		// -- Setup & Fixtures
		let fx_cases = [
			(
				Event::Namespace {
					tgid: 30,
					kind: NsKind::Uts,
					reason: NsReason::Clone,
					old_inum: 4026531838,
					inum: 4026532200,
				},
				"nm: pid=30 type=uts reason=clone old_inum=4026531838 inum=4026532200",
			),
			(Event::Ack { err: 0, features: 3 }, "none: err=0 flags=3"),
			(Event::Exec { pid: 21, tgid: 20 }, "exec: pid=20"),
			(Event::Ignored(IgnoredKind::Ptrace), "ptrace: ignored"),
		];

		// -- Exec & Check
		for (event, line) in fx_cases {
			assert_eq!(event.to_string(), line);
		}

		Ok(())
	}

	#[test]
	fn render_unknown_kind_and_reason_in_ns_lines() -> Result<()> {
		// -- Setup & Fixtures
		let fx_event = Event::Namespaces {
			tgid: 8,
			reason: NsReason::Unknown(9),
			items: vec![NsChange {
				kind: NsKind::Unknown(0x02000000),
				flags: 0,
				old_inum: 5,
				inum: 6,
			}],
		};

		// -- Exec
		let text = fx_event.to_string();

		// -- Check
		assert_eq!(text, "ns: pid=8 reason=unknown count=1\n    type=unknown 5 -> 6");

		Ok(())
	}

	#[test]
	fn render_unrecognized_as_hex() -> Result<()> {
		// -- Exec
		let text = Event::Unrecognized { what: 0x800 }.to_string();

		// -- Check
		assert_eq!(text, "???: what=800");

		Ok(())
	}
}

// endregion: --- Tests
