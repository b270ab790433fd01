use serde_json::Value;

use notes_domain::{body, id};
use notes_storage::models::NoteChanges;

use crate::{NoteItem, NotesService, Result};

impl NotesService {
	/// Replaces the title and content. A body without `content` clears it.
	///
	/// The body is validated before the id is resolved, so an invalid body is reported even for an
	/// unknown id.
	pub async fn update(&self, raw_id: &str, payload: &Value) -> Result<NoteItem> {
		let draft = body::parse_note_body(payload)?;
		let Some(note_id) = id::parse_note_id(raw_id) else {
			return Err(crate::not_found(raw_id));
		};
		let changes = NoteChanges { title: draft.title, content: draft.content };
		let Some(note) = self.store.update(note_id, &changes).await? else {
			return Err(crate::not_found(raw_id));
		};

		tracing::info!(note_id = %note.id, "Note updated.");

		Ok(note.into())
	}
}
