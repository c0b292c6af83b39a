use crate::{error::Result, event::ProcEvent};

/// Consumer of decoded events, fed in receive order.
pub trait EventSink {
	fn deliver(&mut self, event: ProcEvent) -> Result<()>;
}

impl EventSink for Vec<ProcEvent> {
	fn deliver(&mut self, event: ProcEvent) -> Result<()> {
		self.push(event);
		Ok(())
	}
}
