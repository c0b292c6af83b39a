// <linux/netlink.h>
pub const NLMSG_ALIGNTO: usize = 4;
pub const NLMSG_HDRLEN: usize = 16;
pub const NLMSG_NOOP: u16 = 0x1;
pub const NLMSG_ERROR: u16 = 0x2;
pub const NLMSG_DONE: u16 = 0x3;

// <linux/connector.h>
pub const CN_IDX_PROC: u32 = 0x1;
pub const CN_VAL_PROC: u32 = 0x1;

// <linux/cn_proc.h>: enum proc_cn_mcast_op
pub const PROC_CN_GET_FEATURES: u32 = 0;
pub const PROC_CN_MCAST_LISTEN: u32 = 1;
pub const PROC_CN_MCAST_IGNORE: u32 = 2;

// <linux/cn_proc.h>: enum what
pub const PROC_EVENT_NONE: u32 = 0x00000000;
pub const PROC_EVENT_FORK: u32 = 0x00000001;
pub const PROC_EVENT_EXEC: u32 = 0x00000002;
pub const PROC_EVENT_UID: u32 = 0x00000004;
pub const PROC_EVENT_GID: u32 = 0x00000040;
pub const PROC_EVENT_SID: u32 = 0x00000080;
pub const PROC_EVENT_PTRACE: u32 = 0x00000100;
pub const PROC_EVENT_COMM: u32 = 0x00000200;
pub const PROC_EVENT_NS: u32 = 0x00000400;
// "next to last" is coredump, "last" is exit
pub const PROC_EVENT_COREDUMP: u32 = 0x40000000;
pub const PROC_EVENT_EXIT: u32 = 0x80000000;

// <linux/sched.h>
pub const CLONE_NEWNS: u32 = 0x00020000;
pub const CLONE_NEWUTS: u32 = 0x04000000;
pub const CLONE_NEWIPC: u32 = 0x08000000;
pub const CLONE_NEWUSER: u32 = 0x10000000;
pub const CLONE_NEWPID: u32 = 0x20000000;
pub const CLONE_NEWNET: u32 = 0x40000000;

pub const NS_ITEMS_MAX: usize = 7;
