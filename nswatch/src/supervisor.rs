use std::{future::Future, io};

use tokio::{
	signal::unix::{signal, SignalKind},
	task::JoinSet,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::Result;

pub struct Supervisor {
	pub shutdown: CancellationToken,
	pub tasks: JoinSet<Result<()>>,
}

impl Supervisor {
	pub fn new() -> Self {
		Self {
			shutdown: CancellationToken::new(),
			tasks: JoinSet::new(),
		}
	}

	pub fn token(&self) -> CancellationToken {
		self.shutdown.clone()
	}

	pub fn spawn<F>(&mut self, fut: F)
	where
		F: Future<Output = Result<()>> + Send + 'static,
	{
		self.tasks.spawn(fut);
	}

	/// Waits for every task to finish on its own.
	pub async fn wait(mut self) -> Result<()> {
		while let Some(res) = self.tasks.join_next().await {
			res??;
		}
		Ok(())
	}

	pub async fn shutdown(self) -> Result<()> {
		info!("Supervisor shutdown starting");
		self.shutdown.cancel();
		self.wait().await?;
		info!("Supervisor shutdown complete");

		Ok(())
	}
}

/// Cancels `token` on Ctrl-C or SIGTERM.
pub fn install_signal_handlers(token: CancellationToken) -> Result<()> {
	tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), token.clone()));

	let mut sigterm = signal(SignalKind::terminate())?;
	tokio::spawn(async move {
		sigterm.recv().await;
		token.cancel();
	});

	Ok(())
}

/// Cancels `token` once `signal` fires. A handler that could not be installed only gets logged.
async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
	F: Future<Output = io::Result<()>>,
{
	match signal.await {
		Ok(()) => token.cancel(),
		Err(err) => error!("failed to listen for Ctrl-C: {err}"),
	}
}

// region:    --- Tests


// endregion: --- Tests
