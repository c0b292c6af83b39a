use std::io::{self, Write};

use lib_connector::{Event, ProcEvent};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{event::Rx, Result};

/// Renders each event as text on stdout, one event per write.
pub struct PrinterWorker {
	rx: Rx<ProcEvent>,
	shutdown: CancellationToken,
}

impl PrinterWorker {
	pub fn new(rx: Rx<ProcEvent>, shutdown: CancellationToken) -> Self {
		Self { rx, shutdown }
	}

	pub async fn run(self) -> Result<()> {
		loop {
			tokio::select! {
				_ = self.shutdown.cancelled() => {
					info!("Printer shutting down");
					break;
				}

				evt = self.rx.recv() => {
					match evt {
						Ok(evt) => print_event(&evt)?,
						Err(e) => {
							info!("{} channel closed: {:?}", self.rx.name(), e);
							break;
						}
					}
				}
			}
		}

		Ok(())
	}
}

fn print_event(evt: &ProcEvent) -> Result<()> {
	match render(evt) {
		Some(line) => {
			let mut out = io::stdout().lock();
			writeln!(out, "{line}")?;
			out.flush()?;
		}
		None => debug!("ignored event on cpu {}: {:?}", evt.meta.cpu, evt.event),
	}
	Ok(())
}

/// Text for one event, `None` for kinds that are decoded but not shown.
pub fn render(evt: &ProcEvent) -> Option<String> {
	match evt.event {
		Event::Ignored(_) => None,
		ref event => Some(event.to_string()),
	}
}

// region:    --- Tests


// endregion: --- Tests
