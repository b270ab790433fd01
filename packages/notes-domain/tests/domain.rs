use serde_json::json;

use notes_domain::{
	body::{self, MISSING_TITLE_MESSAGE, RejectCode},
	id, search,
};

#[test]
fn accepts_title_and_content() {
	let draft = body::parse_note_body(&json!({ "title": "Cats", "content": "Lorem" }))
		.expect("Expected a valid body.");

	assert_eq!(draft.title, "Cats");
	assert_eq!(draft.content.as_deref(), Some("Lorem"));
}

#[test]
fn ignores_unknown_members() {
	let draft = body::parse_note_body(&json!({ "title": "Cats", "tags": [], "id": "x" }))
		.expect("Expected a valid body.");

	assert_eq!(draft.title, "Cats");
	assert_eq!(draft.content, None);
}

#[test]
fn null_and_absent_content_are_both_empty() {
	for payload in [json!({ "title": "Cats", "content": null }), json!({ "title": "Cats" })] {
		let draft = body::parse_note_body(&payload).expect("Expected a valid body.");

		assert_eq!(draft.content, None, "{payload}");
	}
}

#[test]
fn whitespace_title_is_accepted_as_sent() {
	let draft = body::parse_note_body(&json!({ "title": "   " })).expect("Expected a valid body.");

	assert_eq!(draft.title, "   ");
}

#[test]
fn rejects_missing_title() {
	for payload in [
		json!({}),
		json!({ "foo": "bar" }),
		json!({ "title": "" }),
		json!({ "title": null }),
		json!({ "title": 42 }),
		json!(["title"]),
		json!("title"),
	] {
		assert_eq!(body::parse_note_body(&payload), Err(RejectCode::MissingTitle), "{payload}");
	}
}

#[test]
fn missing_title_message_is_stable() {
	assert_eq!(RejectCode::MissingTitle.message(), "Missing `title` in request body");
	assert_eq!(MISSING_TITLE_MESSAGE, RejectCode::MissingTitle.message());
}

#[test]
fn rejects_non_string_content() {
	assert_eq!(
		body::parse_note_body(&json!({ "title": "Cats", "content": 7 })),
		Err(RejectCode::InvalidContent)
	);
}

#[test]
fn parses_uuid_ids_only() {
	assert!(id::parse_note_id("6f1c1c2e-3e47-4d4f-9a3c-0d8f3c7b2a10").is_some());
	assert!(id::parse_note_id("000000000000000000000001").is_none());
	assert!(id::parse_note_id("").is_none());
	assert!(id::parse_note_id("not-an-id").is_none());
}

#[test]
fn search_terms_are_lowercase_and_deduplicated() {
	assert_eq!(search::search_terms("Cats and CATS, dogs!"), vec!["cats", "and", "dogs"]);
	assert!(search::search_terms("  ?! ").is_empty());
}

#[test]
fn search_terms_are_capped() {
	let raw = (0..100).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");

	assert_eq!(search::search_terms(&raw).len(), search::MAX_SEARCH_TERMS);
}

#[test]
fn matches_any_word_in_title_or_content() {
	let terms = search::search_terms("lorem");

	assert!(search::matches_any(&terms, "Cats", Some("Lorem ipsum")));
	assert!(search::matches_any(&search::search_terms("CATS"), "cats rule", None));
	assert!(!search::matches_any(&terms, "Cats", None));
	assert!(!search::matches_any(&search::search_terms("lor"), "Cats", Some("Lorem")));
}
