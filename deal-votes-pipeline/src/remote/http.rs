use std::time::Duration;

use async_trait::async_trait;
use deal_votes_shared::types::{DeltaOp, EntityKey};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::EndpointError;
use crate::remote::VoteEndpoint;

/// Body of `POST /{collection}/{id}/vote`.
#[derive(Debug, Serialize)]
struct VoteRequest {
    vote: i32,
}

/// Production endpoint that posts deltas to the deals API.
///
/// # Example
///
/// ```ignore
/// let endpoint = HttpVoteEndpoint::new("http://localhost:8000", Duration::from_secs(10))?;
/// let score = endpoint.apply_delta(&EntityKey::deal(4), DeltaOp::Increment).await?;
/// ```
pub struct HttpVoteEndpoint {
    base_url: String,
    client: ReqwestClient,
}

impl HttpVoteEndpoint {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EndpointError> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL of the vote endpoint for `key`.
    pub fn vote_url(&self, key: &EntityKey) -> String {
        format!("{}/{}/{}/vote", self.base_url, key.kind.collection(), key.id)
    }
}

#[async_trait]
impl VoteEndpoint for HttpVoteEndpoint {
    async fn apply_delta(&self, key: &EntityKey, op: DeltaOp) -> Result<i64, EndpointError> {
        let url = self.vote_url(key);
        debug!(url = %url, delta = op.value(), "Posting vote delta");

        let res = self
            .client
            .post(&url)
            .json(&VoteRequest { vote: op.value() })
            .send()
            .await
            .map_err(EndpointError::from_reqwest)?;

        let status = res.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EndpointError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(EndpointError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = res.text().await.map_err(EndpointError::from_reqwest)?;
        score_from_body(&body)
    }
}

/// Extracts the aggregate score from an entity representation.
///
/// Comments and deals report `vote_score`; the enriched deal listing uses
/// `vote_count`. A body with neither, or with a non-integer value, is malformed.
fn score_from_body(body: &str) -> Result<i64, EndpointError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| EndpointError::malformed(format!("invalid JSON: {e}")))?;

    ["vote_score", "vote_count"]
        .iter()
        .find_map(|field| value.get(field))
        .ok_or_else(|| EndpointError::malformed("missing vote_score"))?
        .as_i64()
        .ok_or_else(|| EndpointError::malformed("vote_score is not an integer"))
}
