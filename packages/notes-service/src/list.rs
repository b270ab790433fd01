use serde::{Deserialize, Serialize};

use notes_domain::search;

use crate::{NoteItem, NotesService, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListRequest {
	#[serde(rename = "searchTerm", default)]
	pub search_term: Option<String>,
}

impl NotesService {
	/// Lists every note, or only the ones matching `search_term` when it has any text.
	pub async fn list(&self, req: ListRequest) -> Result<Vec<NoteItem>> {
		let search_term = req.search_term.as_deref().map(str::trim).filter(|term| !term.is_empty());
		let notes = match search_term {
			Some(term) => {
				let terms = search::search_terms(term);

				tracing::debug!(?terms, "Searching notes.");

				if terms.is_empty() {
					Vec::new()
				} else {
					self.store.search(&terms).await?
				}
			},
			None => self.store.list().await?,
		};

		Ok(notes.into_iter().map(NoteItem::from).collect())
	}
}
