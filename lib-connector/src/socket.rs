use std::{
	io,
	mem::{size_of, zeroed},
	os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd},
};

use nswatch_common::constants::CN_IDX_PROC;
use tracing::debug;

use crate::error::Result;

/// Datagram channel the protocol runs over.
pub trait Transport {
	fn send(&self, buf: &[u8]) -> Result<usize>;

	/// Blocks until one datagram arrives. An error means the channel is gone.
	fn recv(&self, buf: &mut [u8]) -> Result<usize>;
}

/// `NETLINK_CONNECTOR` socket bound to the process events multicast group.
/// Needs `CAP_NET_ADMIN`.
pub struct ConnectorSocket {
	fd: OwnedFd,
	kernel: libc::sockaddr_nl,
}

impl ConnectorSocket {
	pub fn bind() -> Result<Self> {
		let raw = unsafe {
			libc::socket(
				libc::AF_NETLINK,
				libc::SOCK_DGRAM | libc::SOCK_CLOEXEC,
				libc::NETLINK_CONNECTOR,
			)
		};
		if raw < 0 {
			return Err(io::Error::last_os_error().into());
		}
		let fd = unsafe { OwnedFd::from_raw_fd(raw) };

		let addr = sockaddr_nl(CN_IDX_PROC);
		let ret = unsafe {
			libc::bind(
				fd.as_raw_fd(),
				&addr as *const libc::sockaddr_nl as *const libc::sockaddr,
				size_of::<libc::sockaddr_nl>() as libc::socklen_t,
			)
		};
		if ret != 0 {
			return Err(io::Error::last_os_error().into());
		}
		debug!("bound connector socket fd={} group={CN_IDX_PROC}", fd.as_raw_fd());

		Ok(Self { fd, kernel: addr })
	}
}

impl std::fmt::Debug for ConnectorSocket {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConnectorSocket")
			.field("fd", &self.fd)
			.field("groups", &self.kernel.nl_groups)
			.finish()
	}
}

impl AsRawFd for ConnectorSocket {
	fn as_raw_fd(&self) -> RawFd {
		self.fd.as_raw_fd()
	}
}

impl Transport for ConnectorSocket {
	fn send(&self, buf: &[u8]) -> Result<usize> {
		let ret = unsafe {
			libc::sendto(
				self.fd.as_raw_fd(),
				buf.as_ptr() as *const libc::c_void,
				buf.len(),
				0,
				&self.kernel as *const libc::sockaddr_nl as *const libc::sockaddr,
				size_of::<libc::sockaddr_nl>() as libc::socklen_t,
			)
		};
		if ret < 0 {
			return Err(io::Error::last_os_error().into());
		}
		Ok(ret as usize)
	}

	fn recv(&self, buf: &mut [u8]) -> Result<usize> {
		loop {
			let ret = unsafe { libc::recv(self.fd.as_raw_fd(), buf.as_mut_ptr() as *mut libc::c_void, buf.len(), 0) };
			if ret >= 0 {
				return Ok(ret as usize);
			}
			let err = io::Error::last_os_error();
			if err.kind() != io::ErrorKind::Interrupted {
				return Err(err.into());
			}
		}
	}
}

fn sockaddr_nl(groups: u32) -> libc::sockaddr_nl {
	let mut addr: libc::sockaddr_nl = unsafe { zeroed() };
	addr.nl_family = libc::AF_NETLINK as libc::sa_family_t;
	addr.nl_pid = 0;
	addr.nl_groups = groups;
	addr
}
