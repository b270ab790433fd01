use uuid::Uuid;

/// Parses a path id. Anything that is not a UUID resolves to nothing, the same as an unknown id.
pub fn parse_note_id(raw: &str) -> Option<Uuid> {
	Uuid::parse_str(raw.trim()).ok()
}
