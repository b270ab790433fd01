pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod time_serde;
pub mod update;

mod error;

pub use delete::DeleteResponse;
pub use error::{Error, Result};
pub use list::ListRequest;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use notes_storage::{NoteStore, models::Note};

/// The note as it is returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
	pub id: Uuid,
	pub title: String,
	pub content: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created: OffsetDateTime,
}
impl From<Note> for NoteItem {
	fn from(note: Note) -> Self {
		Self { id: note.id, title: note.title, content: note.content, created: note.created }
	}
}

/// Handles the notes resource on top of an injected [`NoteStore`].
#[derive(Clone)]
pub struct NotesService {
	pub store: Arc<dyn NoteStore>,
}
impl NotesService {
	pub fn new(store: Arc<dyn NoteStore>) -> Self {
		Self { store }
	}
}

pub(crate) fn not_found(id: &str) -> Error {
	Error::NotFound { message: format!("No note with id {id:?}.") }
}
