mod comment_thread;
mod delta_op;
mod entity_key;
mod parse_error;
mod score_update;
mod votable;
mod vote_direction;
mod vote_plan;

pub use comment_thread::CommentThread;
pub use delta_op::DeltaOp;
pub use entity_key::{EntityKey, EntityKind, VOTE_KEY_PREFIX};
pub use parse_error::ParseTypeError;
pub use score_update::ScoreUpdate;
pub use votable::{Business, Comment, Deal, Votable};
pub use vote_direction::{VoteChoice, VoteDirection};
pub use vote_plan::VotePlan;
