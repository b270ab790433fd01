use std::sync::Arc;

use notes_service::NotesService;
use notes_storage::{NoteStore, db::Db};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NotesService>,
	pub api_prefix: String,
}
impl AppState {
	pub async fn new(config: &notes_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		Self::prepare(Arc::new(db), &config.service.api_prefix).await
	}

	/// Ensures the store's schema and text-search index before serving from it.
	pub async fn prepare(store: Arc<dyn NoteStore>, api_prefix: &str) -> color_eyre::Result<Self> {
		store.ensure_schema().await?;

		Ok(Self::with_store(store, api_prefix))
	}

	pub fn with_store(store: Arc<dyn NoteStore>, api_prefix: &str) -> Self {
		Self {
			service: Arc::new(NotesService::new(store)),
			api_prefix: api_prefix.trim_end_matches('/').to_string(),
		}
	}
}
