use serde_json::Value;

pub const MISSING_TITLE_MESSAGE: &str = "Missing `title` in request body";
pub const INVALID_CONTENT_MESSAGE: &str = "`content` must be a string or null";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	MissingTitle,
	InvalidContent,
}
impl RejectCode {
	pub fn message(self) -> &'static str {
		match self {
			Self::MissingTitle => MISSING_TITLE_MESSAGE,
			Self::InvalidContent => INVALID_CONTENT_MESSAGE,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
	pub title: String,
	/// Absent and `null` both mean no content; a write always replaces the stored value.
	pub content: Option<String>,
}

/// Validates a decoded create or update body.
///
/// Unknown members are ignored. A body that is not an object has no `title`. Only an absent,
/// non-string or empty `title` is rejected; the text is kept as sent.
pub fn parse_note_body(body: &Value) -> Result<NoteDraft, RejectCode> {
	let Some(object) = body.as_object() else {
		return Err(RejectCode::MissingTitle);
	};
	let title = match object.get("title") {
		Some(Value::String(title)) if !title.is_empty() => title.clone(),
		_ => return Err(RejectCode::MissingTitle),
	};
	let content = match object.get("content") {
		None | Some(Value::Null) => None,
		Some(Value::String(text)) => Some(text.clone()),
		Some(_) => return Err(RejectCode::InvalidContent),
	};

	Ok(NoteDraft { title, content })
}
