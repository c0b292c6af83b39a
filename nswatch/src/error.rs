use derive_more::{Display, From};
use flume::RecvError;
use tokio::task::JoinError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),
	EventRecv(RecvError),
	ReceiverPanicked,

	// -- Externals
	//
	#[from]
	JoinError(JoinError),
	#[from]
	Connector(lib_connector::Error),
	#[from]
	Io(std::io::Error), // as example
}

impl From<RecvError> for Error {
	fn from(err: RecvError) -> Self {
		Self::EventRecv(err)
	}
}

// region:    --- Custom

impl Error {
	pub fn custom(val: impl Into<String>) -> Self {
		Self::Custom(val.into())
	}
}

// endregion: --- Custom

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
