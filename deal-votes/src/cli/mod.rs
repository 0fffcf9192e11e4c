//! Command-line surface of the `deal-votes` binary.
use std::collections::HashMap;

use clap::{Parser, Subcommand};
use deal_votes_shared::types::{EntityKey, EntityKind, ScoreUpdate, VoteChoice, VoteDirection};
use tracing::error;

use crate::config::{Config, Dependencies};
use crate::errors::AppError;

#[derive(Debug, Parser)]
#[command(name = "deal-votes", version, about = "Vote on deals, comments, and businesses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cast, switch, or retract a vote
    Cast {
        /// deal, comment, or business
        kind: EntityKind,
        id: i64,
        /// up or down; repeating the recorded direction retracts the vote
        direction: VoteChoice,
        /// Starting score when DEALS_API_URL=mock
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        mock_score: i64,
    },
    /// Print the direction recorded locally for an entity
    Show {
        /// deal, comment, or business
        kind: EntityKind,
        id: i64,
    },
}

/// Outcome of a command, rendered by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Voted(ScoreUpdate),
    Recorded(EntityKey, VoteDirection),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Voted(update) => write!(
                f,
                "{}: score {} (your vote: {})",
                update.key, update.score, update.direction
            ),
            Outcome::Recorded(key, direction) => write!(f, "{key}: your vote: {direction}"),
        }
    }
}

impl Cli {
    /// Runs the command against dependencies built from `config`.
    pub async fn run(self, config: &Config) -> Result<Outcome, AppError> {
        match self.command {
            Command::Cast {
                kind,
                id,
                direction,
                mock_score,
            } => {
                let key = EntityKey::new(kind, id);
                let deps = Dependencies::new(config, HashMap::from([(key, mock_score)])).await?;
                match deps.controller.cast_vote(kind, id, direction).await {
                    Ok(update) => Ok(Outcome::Voted(update)),
                    Err(e) => {
                        error!(entity = %key, error = %e, committed = e.remote_committed(), "Vote failed");
                        Err(e.into())
                    }
                }
            }
            Command::Show { kind, id } => {
                let deps = Dependencies::new(config, HashMap::new()).await?;
                let direction = deps.controller.recorded_direction(kind, id).await?;
                Ok(Outcome::Recorded(EntityKey::new(kind, id), direction))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::{ApiTarget, LogFormat, StoreTarget};

    fn mock_config() -> Config {
        Config {
            api: ApiTarget::Mock,
            store: StoreTarget::Memory,
            request_timeout: Duration::from_secs(1),
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn test_parse_cast() {
        let cli = Cli::try_parse_from(["deal-votes", "cast", "comment", "12", "down"]).unwrap();
        match cli.command {
            Command::Cast { kind, id, direction, mock_score } => {
                assert_eq!(kind, EntityKind::Comment);
                assert_eq!(id, 12);
                assert_eq!(direction, VoteChoice::Down);
                assert_eq!(mock_score, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["deal-votes", "cast", "user", "1", "up"]).is_err());
        assert!(Cli::try_parse_from(["deal-votes", "cast", "deal", "1", "sideways"]).is_err());
    }

    #[tokio::test]
    async fn test_cast_with_mock_endpoint() {
        let cli = Cli::try_parse_from([
            "deal-votes", "cast", "deal", "4", "up", "--mock-score", "-2",
        ])
        .unwrap();

        let outcome = cli.run(&mock_config()).await.unwrap();

        match outcome {
            Outcome::Voted(update) => {
                assert_eq!(update.score, -1);
                assert_eq!(update.direction, VoteDirection::Up);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_show_without_record() {
        let cli = Cli::try_parse_from(["deal-votes", "show", "business", "3"]).unwrap();

        let outcome = cli.run(&mock_config()).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Recorded(EntityKey::business(3), VoteDirection::None)
        );
    }
}
