use clap::{Parser, ValueEnum};
use lib_connector::{Action, NsAbi};

#[derive(Parser, Debug)]
#[command(name = "nswatch", about = "Print process fork/exec/exit and namespace events from the proc connector")]
pub struct Cli {
	/// Subscription request to send before receiving. Without it, only receive.
	#[arg(value_enum)]
	pub action: Option<CliAction>,

	#[arg(long, value_enum, default_value = "multi", help = "Kernel layout of namespace events")]
	pub ns_abi: CliNsAbi,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CliAction {
	#[value(alias = "listen")]
	Sub,
	#[value(alias = "ignore")]
	Unsub,
	Features,
}

impl From<CliAction> for Action {
	fn from(val: CliAction) -> Self {
		match val {
			CliAction::Sub => Action::Listen,
			CliAction::Unsub => Action::Ignore,
			CliAction::Features => Action::QueryFeatures,
		}
	}
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CliNsAbi {
	Legacy,
	Multi,
}

impl From<CliNsAbi> for NsAbi {
	fn from(val: CliNsAbi) -> Self {
		match val {
			CliNsAbi::Legacy => NsAbi::Legacy,
			CliNsAbi::Multi => NsAbi::Multi,
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
