// region:    --- Modules
mod cli;
mod error;
mod event;
mod supervisor;
mod workers;
// endregion: --- Modules

use crate::{
	cli::args::Cli,
	event::new_channel,
	supervisor::{install_signal_handlers, Supervisor},
	workers::{PrinterWorker, ReceiverWorker},
};

pub use self::error::{Error, Result};
use clap::Parser;
use lib_connector::{ConnectorSocket, ProcEvent, Subscription, SubscriptionEncoder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
	let args = Cli::parse();
	tracing_subscriber::fmt()
		.with_target(false)
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	// Binding the proc connector group requires CAP_NET_ADMIN.
	let socket = ConnectorSocket::bind()?;

	if let Some(action) = args.action {
		let mut subscription = Subscription::new(SubscriptionEncoder::new(std::process::id()));
		let seq = subscription.request(&socket, action.into())?;
		info!("{action:?} request sent (seq {seq}), subscription is {:?}", subscription.state());
	}

	let (evt_tx, evt_rx) = new_channel::<ProcEvent>("proc_event");

	let supervisor = {
		let mut supervisor = Supervisor::new();
		install_signal_handlers(supervisor.token())?;
		supervisor.spawn(PrinterWorker::new(evt_rx, supervisor.token()).run());
		supervisor
	};

	let receiver = ReceiverWorker::start(socket, args.ns_abi.into(), evt_tx)?;

	let token = supervisor.token();
	tokio::select! {
		_ = token.cancelled() => {
			supervisor.shutdown().await?;
			Ok(())
		}

		res = receiver.join() => {
			// The event channel is closed now; let the printer drain it before exiting.
			supervisor.wait().await?;
			res
		}
	}
}
