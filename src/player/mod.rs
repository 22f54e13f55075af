pub mod profile;

pub use profile::{
    validate_age, validate_height, validate_identity, validate_name, validate_weight,
    CompletedActivity, PlayerProfile, ProfileValidationError,
};
