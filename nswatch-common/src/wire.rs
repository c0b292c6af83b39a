use zerocopy_derive::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::constants::NS_ITEMS_MAX;

// linux/netlink.h: struct nlmsghdr
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlMsgHdr {
	pub len: u32,   // 0..4
	pub kind: u16,  // 4..6
	pub flags: u16, // 6..8
	pub seq: u32,   // 8..12
	pub pid: u32,   // 12..16
}

// linux/connector.h: struct cb_id
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct CbId {
	pub idx: u32, // 0..4
	pub val: u32, // 4..8
}

// linux/connector.h: struct cn_msg
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct CnMsg {
	pub id: CbId,   // 0..8
	pub seq: u32,   // 8..12
	pub ack: u32,   // 12..16
	pub len: u16,   // 16..18 | payload length following the envelope
	pub flags: u16, // 18..20
}

// linux/cn_proc.h: struct proc_event.{what,cpu,timestamp_ns}
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ProcEventHeader {
	pub what: u32,         // 0..4
	pub cpu: u32,          // 4..8
	pub timestamp_ns: u64, // 8..16
}

// linux/cn_proc.h: struct proc_event.ack
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct AckProcEvent {
	pub err: u32,
}

// linux/cn_proc.h: struct proc_event.fork
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ForkProcEvent {
	pub parent_pid: u32,  // 0..4
	pub parent_tgid: u32, // 4..8
	pub child_pid: u32,   // 8..12
	pub child_tgid: u32,  // 12..16
}

// linux/cn_proc.h: struct proc_event.exec
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ExecProcEvent {
	pub process_pid: u32,  // 0..4
	pub process_tgid: u32, // 4..8
}

// linux/cn_proc.h: struct proc_event.exit
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ExitProcEvent {
	pub process_pid: u32,  // 0..4
	pub process_tgid: u32, // 4..8
	pub exit_code: u32,    // 8..12
	pub exit_signal: u32,  // 12..16
}

/// Single namespace transition per event (older patched kernels).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NsLegacyProcEvent {
	pub process_pid: u32,  // 0..4
	pub process_tgid: u32, // 4..8
	pub ns_type: u32,      // 8..12
	pub reason: u32,       // 12..16
	pub old_inum: u64,     // 16..24
	pub inum: u64,         // 24..32
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NsProcItem {
	pub item_type: u32, // 0..4 | CLONE_NEW* flag
	pub flags: u32,     // 4..8
	pub old_inum: u64,  // 8..16
	pub inum: u64,      // 16..24
}

/// Multi-item namespace event. Only the first `count` items are populated.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NsProcEvent {
	pub process_pid: u32,                  // 0..4
	pub process_tgid: u32,                 // 4..8
	pub reason: u32,                       // 8..12
	pub count: u32,                        // 12..16
	pub items: [NsProcItem; NS_ITEMS_MAX], // 16..184
}

/// Request header sent to subscribe/unsubscribe: nlmsghdr + cn_msg.
/// The 4-byte action code follows it on the wire.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NetlinkProcMessage {
	pub header: NlMsgHdr, // 0..16
	pub data: CnMsg,      // 16..36
}
