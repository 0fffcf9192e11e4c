mod controller;
mod endpoint;
mod reconcile;

pub use controller::{VOTE_FAILED_MESSAGE, VoteError};
pub use endpoint::EndpointError;
pub use reconcile::ReconcileError;
