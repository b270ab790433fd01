use time::OffsetDateTime;
use uuid::Uuid;

/// Columns selected for [`Note`]. The generated search vector is never read back.
pub const NOTE_COLUMNS: &str = "id, title, content, created";

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
	pub id: Uuid,
	pub title: String,
	pub content: Option<String>,
	pub created: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct NewNote {
	pub title: String,
	pub content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NoteChanges {
	pub title: String,
	pub content: Option<String>,
}
