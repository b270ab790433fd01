use std::{future::Future, pin::Pin};

use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{NewNote, Note, NoteChanges},
	queries,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for notes.
///
/// Implementations assign `id` and `created` on insert. Lookups by an unknown id report `None`
/// and deleting one reports `false`; neither is an error.
pub trait NoteStore
where
	Self: Send + Sync,
{
	/// Prepares tables and the text-search index.
	fn ensure_schema<'a>(&'a self) -> BoxFuture<'a, Result<()>>;

	fn insert<'a>(&'a self, note: &'a NewNote) -> BoxFuture<'a, Result<Note>>;

	fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>>;

	/// `terms` are lowercase tokens; a note matches when any of them matches.
	fn search<'a>(&'a self, terms: &'a [String]) -> BoxFuture<'a, Result<Vec<Note>>>;

	fn find<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Note>>>;

	fn update<'a>(
		&'a self,
		id: Uuid,
		changes: &'a NoteChanges,
	) -> BoxFuture<'a, Result<Option<Note>>>;

	fn delete<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool>>;
}

impl NoteStore for Db {
	fn ensure_schema<'a>(&'a self) -> BoxFuture<'a, Result<()>> {
		Box::pin(Db::ensure_schema(self))
	}

	fn insert<'a>(&'a self, note: &'a NewNote) -> BoxFuture<'a, Result<Note>> {
		Box::pin(queries::insert_note(&self.pool, note))
	}

	fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(queries::list_notes(&self.pool))
	}

	fn search<'a>(&'a self, terms: &'a [String]) -> BoxFuture<'a, Result<Vec<Note>>> {
		Box::pin(queries::search_notes(&self.pool, terms))
	}

	fn find<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(queries::find_note(&self.pool, id))
	}

	fn update<'a>(
		&'a self,
		id: Uuid,
		changes: &'a NoteChanges,
	) -> BoxFuture<'a, Result<Option<Note>>> {
		Box::pin(queries::update_note(&self.pool, id, changes))
	}

	fn delete<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool>> {
		Box::pin(queries::delete_note(&self.pool, id))
	}
}
