pub mod store;

pub use store::{
    record_from_json, record_to_json, JsonProfileRepository, PlayerRecord, ProfileRepository,
    ProfileStoreError,
};
