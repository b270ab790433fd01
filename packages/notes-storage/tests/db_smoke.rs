use uuid::Uuid;

use notes_config::Postgres;
use notes_storage::{
	NoteStore,
	db::Db,
	models::{NewNote, NoteChanges},
	queries,
};
use notes_testkit::TestDatabase;

async fn connect(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

fn new_note(title: &str, content: Option<&str>) -> NewNote {
	NewNote { title: title.to_string(), content: content.map(str::to_string) }
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn db_connects_and_bootstraps_twice() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps_twice; set NOTES_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;

	db.ensure_schema().await.expect("Failed to re-run schema.");

	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM pg_indexes WHERE indexname = 'idx_notes_search_vector'",
	)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to query indexes.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn crud_round_trip() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping crud_round_trip; set NOTES_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let created = NoteStore::insert(&db, &new_note("Cats", Some("Lorem ipsum")))
		.await
		.expect("Failed to insert note.");
	let found = NoteStore::find(&db, created.id)
		.await
		.expect("Failed to find note.")
		.expect("Inserted note must resolve.");

	assert_eq!(found, created);

	let changes = NoteChanges { title: "Dogs".to_string(), content: Some("Woof".to_string()) };
	let updated = NoteStore::update(&db, created.id, &changes)
		.await
		.expect("Failed to update note.")
		.expect("Updated note must resolve.");

	assert_eq!(updated.title, "Dogs");
	assert_eq!(updated.content.as_deref(), Some("Woof"));
	assert_eq!(updated.created, created.created);

	let changes = NoteChanges { title: "Dogs".to_string(), content: None };
	let updated = NoteStore::update(&db, created.id, &changes)
		.await
		.expect("Failed to update note.")
		.expect("Updated note must resolve.");

	assert_eq!(updated.content, None);
	assert!(NoteStore::delete(&db, created.id).await.expect("Failed to delete note."));
	assert!(!NoteStore::delete(&db, created.id).await.expect("Failed to delete note."));
	assert!(NoteStore::find(&db, created.id).await.expect("Failed to find note.").is_none());
	assert!(
		NoteStore::update(&db, Uuid::new_v4(), &changes)
			.await
			.expect("Failed to update note.")
			.is_none()
	);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn text_search_matches_title_or_content() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping text_search_matches_title_or_content; set NOTES_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;

	for (title, content) in [
		("5 life lessons learned from cats", Some("Posuere sollicitudin aliquam.")),
		("What the government doesn't want you to know", None),
		("Dogs are fine", Some("Cats disagree")),
	] {
		NoteStore::insert(&db, &new_note(title, content)).await.expect("Failed to insert note.");
	}

	let hits = NoteStore::search(&db, &["cats".to_string()]).await.expect("Failed to search.");

	assert_eq!(hits.len(), 2);

	let hits =
		NoteStore::search(&db, &["GOVERNMENT".to_lowercase()]).await.expect("Failed to search.");

	assert_eq!(hits.len(), 1);

	let hits = NoteStore::search(&db, &["zebra".to_string()]).await.expect("Failed to search.");

	assert!(hits.is_empty());
	assert_eq!(NoteStore::list(&db).await.expect("Failed to list.").len(), 3);
	assert_eq!(queries::count_notes(&db.pool).await.expect("Failed to count."), 3);
	assert_eq!(queries::delete_all_notes(&db.pool).await.expect("Failed to clear."), 3);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
