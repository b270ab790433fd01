use std::sync::Mutex;

use time::OffsetDateTime;
use uuid::Uuid;

use notes_domain::search;
use notes_storage::{
	BoxFuture, Error, NoteStore, Result,
	models::{NewNote, Note, NoteChanges},
};

/// In-process [`NoteStore`] keeping notes in insertion order.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
	notes: Mutex<Vec<Note>>,
}
impl MemoryNoteStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store holding one note per `(title, content)` pair.
	pub fn seeded(seed: &[(&str, Option<&str>)]) -> Self {
		let store = Self::new();

		{
			let mut notes = store.lock();

			for &(title, content) in seed {
				notes.push(new_note(title.to_string(), content.map(str::to_string)));
			}
		}

		store
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	pub fn snapshot(&self) -> Vec<Note> {
		self.lock().clone()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
		self.notes.lock().unwrap_or_else(|err| err.into_inner())
	}
}
impl NoteStore for MemoryNoteStore {
	fn ensure_schema<'a>(&'a self) -> BoxFuture<'a, Result<()>> {
		Box::pin(async { Ok(()) })
	}

	fn insert<'a>(&'a self, note: &'a NewNote) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async move {
			let note = new_note(note.title.clone(), note.content.clone());

			self.lock().push(note.clone());

			Ok(note)
		})
	}

	fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async move { Ok(self.snapshot()) })
	}

	fn search<'a>(&'a self, terms: &'a [String]) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async move {
			let notes = self
				.lock()
				.iter()
				.filter(|note| search::matches_any(terms, &note.title, note.content.as_deref()))
				.cloned()
				.collect();

			Ok(notes)
		})
	}

	fn find<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(async move { Ok(self.lock().iter().find(|note| note.id == id).cloned()) })
	}

	fn update<'a>(
		&'a self,
		id: Uuid,
		changes: &'a NoteChanges,
	) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(async move {
			let mut notes = self.lock();
			let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
				return Ok(None);
			};

			note.title = changes.title.clone();
			note.content = changes.content.clone();

			Ok(Some(note.clone()))
		})
	}

	fn delete<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool>> {
		Box::pin(async move {
			let mut notes = self.lock();
			let before = notes.len();

			notes.retain(|note| note.id != id);

			Ok(notes.len() != before)
		})
	}
}

/// A [`NoteStore`] whose every call fails, for exercising internal-error paths.
#[derive(Debug, Default)]
pub struct UnavailableNoteStore;
impl NoteStore for UnavailableNoteStore {
	fn ensure_schema<'a>(&'a self) -> BoxFuture<'a, Result<()>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn insert<'a>(&'a self, _note: &'a NewNote) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn search<'a>(&'a self, _terms: &'a [String]) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn find<'a>(&'a self, _id: Uuid) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn update<'a>(
		&'a self,
		_id: Uuid,
		_changes: &'a NoteChanges,
	) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(async { Err(unavailable()) })
	}

	fn delete<'a>(&'a self, _id: Uuid) -> BoxFuture<'a, Result<bool>> {
		Box::pin(async { Err(unavailable()) })
	}
}

fn new_note(title: String, content: Option<String>) -> Note {
	Note { id: Uuid::new_v4(), title, content, created: OffsetDateTime::now_utc() }
}

fn unavailable() -> Error {
	Error::Unavailable("connection refused".to_string())
}
