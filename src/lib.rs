// Re-export core modules for use by the binary or other consumers
pub mod data;
pub mod persistence;
pub mod player;
pub mod rules;
pub mod ui;

// Expose the types callers need to drive a session
pub use crate::data::catalog::{load_catalog, ActivityId, Catalog, ServiceId, SpotId};
pub use crate::persistence::store::{JsonProfileRepository, PlayerRecord, ProfileRepository};
pub use crate::player::profile::{PlayerProfile, ProfileValidationError};
pub use crate::rules::progression::{
    edit_profile, perform_activity, purchase_service, visit_spot, ProgressionError,
};
