use serde_json::Value;

use notes_domain::body;
use notes_storage::models::NewNote;

use crate::{NoteItem, NotesService, Result};

impl NotesService {
	/// Validates `payload` and stores a new note. Members other than `title` and `content` are
	/// ignored.
	pub async fn create(&self, payload: &Value) -> Result<NoteItem> {
		let draft = body::parse_note_body(payload)?;
		let new_note = NewNote { title: draft.title, content: draft.content };
		let note = self.store.insert(&new_note).await?;

		tracing::info!(note_id = %note.id, "Note created.");

		Ok(note.into())
	}
}
