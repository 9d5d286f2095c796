//! Entity types shared between the client, API service and AI service.
//!
//! All entities are plain values related by string identifiers. They are
//! created and persisted by the collaborators that import them; this crate
//! only fixes their shape and JSON wire format (camelCase keys, RFC 3339
//! timestamps).

mod reward;
mod routine;
mod session;
mod user;

pub use reward::{Reward, RewardPayload, RewardType};
pub use routine::{Routine, Step, StepType};
pub use session::{CheckIn, CheckInStatus, Session};
pub use user::{PbtTime, User, UserTier};

/// Generates a fresh entity identifier.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
