use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use notes_domain::body;
use notes_storage::{NoteStore, db::Db, models::NewNote, queries};

#[derive(Debug, Parser)]
#[command(
	version = notes_cli::VERSION,
	rename_all = "kebab",
	styles = notes_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// JSON array of `{ "title": ..., "content": ... }` objects.
	#[arg(long, short = 'f', value_name = "FILE")]
	pub file: PathBuf,
	/// Delete every existing note before inserting.
	#[arg(long)]
	pub reset: bool,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = notes_config::load(&args.config)?;
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let raw = fs::read_to_string(&args.file)?;
	let notes = parse_seed(&raw)?;
	let db = Db::connect(&config.storage.postgres).await?;

	if args.reset {
		NoteStore::ensure_schema(&db).await?;

		let removed = queries::delete_all_notes(&db.pool).await?;

		tracing::info!(removed, "Existing notes removed.");
	}

	let inserted = seed(&db, &notes).await?;

	tracing::info!(inserted, "Seed notes inserted.");

	Ok(())
}

/// Validates a seed document. Every entry must pass the same checks as a create request.
pub fn parse_seed(raw: &str) -> color_eyre::Result<Vec<NewNote>> {
	let value: Value = serde_json::from_str(raw)?;
	let Some(entries) = value.as_array() else {
		return Err(eyre::eyre!("Seed file must contain a JSON array."));
	};
	let mut notes = Vec::with_capacity(entries.len());

	for (index, entry) in entries.iter().enumerate() {
		let draft = body::parse_note_body(entry)
			.map_err(|code| eyre::eyre!("Seed entry {index}: {}.", code.message()))?;

		notes.push(NewNote { title: draft.title, content: draft.content });
	}

	Ok(notes)
}

/// Ensures the schema and text-search index, then inserts `notes` in order.
pub async fn seed(store: &dyn NoteStore, notes: &[NewNote]) -> color_eyre::Result<usize> {
	store.ensure_schema().await?;

	for note in notes {
		store.insert(note).await?;
	}

	Ok(notes.len())
}

#[cfg(test)]
mod tests {
	use notes_testkit::{MemoryNoteStore, UnavailableNoteStore};

	use super::*;

	#[test]
	fn parses_valid_entries() {
		let notes = parse_seed(
			r#"[
				{ "title": "5 life lessons learned from cats", "content": "Lorem ipsum" },
				{ "title": "What the government doesn't want you to know about cats" }
			]"#,
		)
		.expect("Failed to parse seed.");

		assert_eq!(notes.len(), 2);
		assert_eq!(notes[0].content.as_deref(), Some("Lorem ipsum"));
		assert_eq!(notes[1].content, None);
	}

	#[test]
	fn rejects_entry_without_title() {
		let err = parse_seed(r#"[{ "title": "ok" }, { "content": "no title" }]"#)
			.expect_err("Expected a seed error.");

		assert!(err.to_string().contains("Seed entry 1"));
	}

	#[test]
	fn rejects_non_array_documents() {
		assert!(parse_seed(r#"{ "title": "x" }"#).is_err());
	}

	#[tokio::test]
	async fn seeds_into_store() {
		let store = MemoryNoteStore::new();
		let notes = parse_seed(r#"[{ "title": "a" }, { "title": "b", "content": null }]"#)
			.expect("Failed to parse seed.");
		let inserted = seed(&store, &notes).await.expect("Failed to seed.");

		assert_eq!(inserted, 2);
		assert_eq!(store.len(), 2);
	}

	#[tokio::test]
	async fn unavailable_store_fails_before_inserting() {
		let notes = parse_seed(r#"[{ "title": "a" }]"#).expect("Failed to parse seed.");
		let err = seed(&UnavailableNoteStore, &notes).await.expect_err("Expected a store error.");

		assert!(err.to_string().contains("Store unavailable"));
	}
}
