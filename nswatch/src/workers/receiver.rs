use std::thread;

use lib_connector::{NsAbi, ProcEvent, Receiver, Transport};
use tracing::{error, info};

use crate::{
	error::{Error, Result},
	event::Tx,
};

/// Runs the blocking receive loop on its own thread. Decoded events go out through `tx`
/// in the order the kernel delivered them.
pub struct ReceiverWorker {
	done: flume::Receiver<Result<()>>,
}

impl ReceiverWorker {
	pub fn start<T>(transport: T, abi: NsAbi, tx: Tx<ProcEvent>) -> Result<Self>
	where
		T: Transport + Send + 'static,
	{
		let (done_tx, done) = flume::bounded(1);

		thread::Builder::new().name("nl-recv".into()).spawn(move || {
			let mut sink = tx;
			let mut receiver = Receiver::new(transport, abi);
			info!("receiving proc events ({abi:?} namespace layout)");

			let res = receiver.run(&mut sink).map_err(Error::from);
			if let Err(err) = &res {
				error!("receive loop stopped: {err}");
			}
			let _ = done_tx.send(res);
		})?;

		Ok(Self { done })
	}

	/// Resolves once the receive loop has ended, with the reason it ended.
	pub async fn join(self) -> Result<()> {
		match self.done.recv_async().await {
			Ok(res) => res,
			Err(_) => Err(Error::ReceiverPanicked),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
