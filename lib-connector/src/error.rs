use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),
	/// Fewer bytes left than the structure being read requires.
	ShortRecord {
		what: &'static str,
		need: usize,
		got: usize,
	},
	/// Multi-item namespace event claiming more entries than the array holds.
	NsCountOverflow {
		count: u32,
	},
	SinkClosed,

	// -- Externals
	#[from]
	Io(std::io::Error),
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
