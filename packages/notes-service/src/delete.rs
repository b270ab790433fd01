use serde::{Deserialize, Serialize};

use notes_domain::id;

use crate::{NotesService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
	/// False when there was nothing to delete.
	pub removed: bool,
}

impl NotesService {
	/// Deletes the note if it exists. An unknown or malformed id is not an error.
	pub async fn delete(&self, raw_id: &str) -> Result<DeleteResponse> {
		let Some(note_id) = id::parse_note_id(raw_id) else {
			return Ok(DeleteResponse { removed: false });
		};
		let removed = self.store.delete(note_id).await?;

		if removed {
			tracing::info!(%note_id, "Note deleted.");
		}

		Ok(DeleteResponse { removed })
	}
}
