use notes_domain::id;

use crate::{NoteItem, NotesService, Result};

impl NotesService {
	pub async fn get(&self, raw_id: &str) -> Result<NoteItem> {
		let Some(note_id) = id::parse_note_id(raw_id) else {
			return Err(crate::not_found(raw_id));
		};
		let Some(note) = self.store.find(note_id).await? else {
			return Err(crate::not_found(raw_id));
		};

		Ok(note.into())
	}
}
