use notes_domain::body::RejectCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	Validation { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<notes_storage::Error> for Error {
	fn from(err: notes_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<RejectCode> for Error {
	fn from(code: RejectCode) -> Self {
		Self::Validation { message: code.message().to_string() }
	}
}
