use sqlx::PgPool;
use uuid::Uuid;

use crate::{
	Result,
	models::{NOTE_COLUMNS, NewNote, Note, NoteChanges},
};

pub async fn insert_note(pool: &PgPool, note: &NewNote) -> Result<Note> {
	let sql = format!(
		"\
INSERT INTO notes (id, title, content)
VALUES ($1, $2, $3)
RETURNING {NOTE_COLUMNS}"
	);
	let inserted = sqlx::query_as::<_, Note>(&sql)
		.bind(Uuid::new_v4())
		.bind(note.title.as_str())
		.bind(note.content.as_deref())
		.fetch_one(pool)
		.await?;

	Ok(inserted)
}

pub async fn list_notes(pool: &PgPool) -> Result<Vec<Note>> {
	let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY created, id");
	let notes = sqlx::query_as::<_, Note>(&sql).fetch_all(pool).await?;

	Ok(notes)
}

/// Returns notes whose title or content matches any of `terms` under English full-text rules.
pub async fn search_notes(pool: &PgPool, terms: &[String]) -> Result<Vec<Note>> {
	if terms.is_empty() {
		return Ok(Vec::new());
	}

	let sql = format!(
		"\
SELECT {NOTE_COLUMNS}
FROM notes
WHERE EXISTS (
	SELECT 1
	FROM unnest($1::text[]) AS term(value)
	WHERE search_vector @@ plainto_tsquery('english', term.value)
)
ORDER BY created, id"
	);
	let notes = sqlx::query_as::<_, Note>(&sql).bind(terms).fetch_all(pool).await?;

	Ok(notes)
}

pub async fn find_note(pool: &PgPool, id: Uuid) -> Result<Option<Note>> {
	let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");
	let note = sqlx::query_as::<_, Note>(&sql).bind(id).fetch_optional(pool).await?;

	Ok(note)
}

pub async fn update_note(pool: &PgPool, id: Uuid, changes: &NoteChanges) -> Result<Option<Note>> {
	let sql = format!(
		"\
UPDATE notes
SET
	title = $2,
	content = $3
WHERE id = $1
RETURNING {NOTE_COLUMNS}"
	);
	let note = sqlx::query_as::<_, Note>(&sql)
		.bind(id)
		.bind(changes.title.as_str())
		.bind(changes.content.as_deref())
		.fetch_optional(pool)
		.await?;

	Ok(note)
}

pub async fn delete_note(pool: &PgPool, id: Uuid) -> Result<bool> {
	let result = sqlx::query("DELETE FROM notes WHERE id = $1").bind(id).execute(pool).await?;

	Ok(result.rows_affected() > 0)
}

pub async fn delete_all_notes(pool: &PgPool) -> Result<u64> {
	let result = sqlx::query("DELETE FROM notes").execute(pool).await?;

	Ok(result.rows_affected())
}

pub async fn count_notes(pool: &PgPool) -> Result<i64> {
	let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM notes").fetch_one(pool).await?;

	Ok(count)
}
