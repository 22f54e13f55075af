pub mod progression;
pub mod stats;

pub use progression::{
    edit_profile, perform_activity, purchase_service, visit_spot, ActivityOutcome,
    ProgressionError, ServiceOutcome, VisitOutcome,
};
pub use stats::{apply_boosts, StatBlock, StatKind};
