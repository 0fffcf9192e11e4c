use std::collections::HashMap;
use std::sync::Arc;

use deal_votes_pipeline::controller::VoteController;
use deal_votes_pipeline::remote::{EndpointSource, VoteEndpoint};
use deal_votes_repository::{MemoryVoteStore, SqliteVoteStore, VoteStore};
use deal_votes_shared::types::EntityKey;
use tracing::info;

use crate::config::{ApiTarget, Config, StoreTarget};
use crate::errors::AppError;

/// `Dependencies` holds the vote controller wired to the configured local store
/// and remote endpoint.
pub struct Dependencies {
    pub controller: VoteController,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Settings read from the environment
    /// * `mock_scores` - Starting scores of the in-process endpoint; ignored
    ///   unless the API target is `mock`
    ///
    /// # Returns
    ///
    /// `Ok(Self)` on success, or an `AppError` if the store cannot be opened or
    /// the HTTP client cannot be built.
    pub async fn new(
        config: &Config,
        mock_scores: HashMap<EntityKey, i64>,
    ) -> Result<Self, AppError> {
        info!(
            api = ?config.api,
            store = ?config.store,
            request_timeout_secs = config.request_timeout.as_secs(),
            "Initializing dependencies"
        );

        let store: Arc<dyn VoteStore> = match &config.store {
            StoreTarget::Memory => Arc::new(MemoryVoteStore::new()),
            StoreTarget::Sqlite(url) => Arc::new(SqliteVoteStore::connect(url).await?),
        };

        let source = match &config.api {
            ApiTarget::Mock => EndpointSource::mock(mock_scores),
            ApiTarget::Live(base_url) => {
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(AppError::config(format!(
                        "DEALS_API_URL must be an http(s) URL or 'mock', got '{base_url}'"
                    )));
                }
                EndpointSource::live(base_url, config.request_timeout)
            }
        };
        let endpoint: Arc<dyn VoteEndpoint> = Arc::from(source.into_endpoint()?);

        Ok(Self {
            controller: VoteController::new(store, endpoint),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deal_votes_shared::types::{EntityKind, VoteChoice, VoteDirection};
    use std::time::Duration;
    use tempfile::TempDir;

    use crate::config::LogFormat;

    fn config(api: ApiTarget, store: StoreTarget) -> Config {
        Config {
            api,
            store,
            request_timeout: Duration::from_secs(1),
            log_format: LogFormat::Pretty,
        }
    }

    #[tokio::test]
    async fn test_mock_endpoint_and_memory_store() {
        let deps = Dependencies::new(
            &config(ApiTarget::Mock, StoreTarget::Memory),
            HashMap::from([(EntityKey::deal(1), 5)]),
        )
        .await
        .unwrap();

        let update = deps
            .controller
            .cast_vote(EntityKind::Deal, 1, VoteChoice::Up)
            .await
            .unwrap();

        assert_eq!(update.score, 6);
        assert_eq!(update.direction, VoteDirection::Up);
    }

    #[tokio::test]
    async fn test_sqlite_store_keeps_records_between_runs() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("votes.db").display());
        let cfg = config(ApiTarget::Mock, StoreTarget::Sqlite(url));

        let first = Dependencies::new(&cfg, HashMap::from([(EntityKey::comment(2), 0)]))
            .await
            .unwrap();
        first
            .controller
            .cast_vote(EntityKind::Comment, 2, VoteChoice::Down)
            .await
            .unwrap();
        drop(first);

        let second = Dependencies::new(&cfg, HashMap::new()).await.unwrap();
        let direction = second
            .controller
            .recorded_direction(EntityKind::Comment, 2)
            .await
            .unwrap();

        assert_eq!(direction, VoteDirection::Down);
    }

    #[tokio::test]
    async fn test_unreachable_store_path_fails() {
        let dir = TempDir::new().unwrap();
        let url = format!(
            "sqlite://{}",
            dir.path().join("missing").join("votes.db").display()
        );

        let result = Dependencies::new(&config(ApiTarget::Mock, StoreTarget::Sqlite(url)), HashMap::new()).await;

        assert!(matches!(result, Err(AppError::Store(_))));
    }

    #[tokio::test]
    async fn test_live_url_without_scheme_is_rejected() {
        let result = Dependencies::new(
            &config(ApiTarget::Live("localhost:8000".to_string()), StoreTarget::Memory),
            HashMap::new(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
