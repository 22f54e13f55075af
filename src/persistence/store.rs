use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::catalog::SpotId;
use crate::player::{CompletedActivity, PlayerProfile};
use crate::rules::stats::StatBlock;

/// On-disk snapshot of a profile. Field layout is the round-trip contract;
/// `visited_spots` carries no meaningful order while `completed_activities`
/// preserves performance order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub age: u32,
    pub height: u32,
    pub weight: u32,
    pub visited_spots: Vec<SpotId>,
    pub completed_activities: Vec<CompletedActivity>,
    pub stats: StatBlock,
    pub total_points: i64,
}

impl PlayerRecord {
    /// Snapshot a live profile. Visited ids are written sorted so saving the
    /// same state twice produces the same bytes.
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        let mut visited_spots: Vec<SpotId> = profile.visited_spots.iter().copied().collect();
        visited_spots.sort_by_key(|id| id.0);
        Self {
            name: profile.name.clone(),
            age: profile.age,
            height: profile.height,
            weight: profile.weight,
            visited_spots,
            completed_activities: profile.completed_activities.clone(),
            stats: profile.stats,
            total_points: profile.total_points,
        }
    }

    /// Rebuilds the live profile exactly as recorded. The record is trusted:
    /// identity ranges are enforced when fields change, not at load.
    pub fn into_profile(self) -> PlayerProfile {
        PlayerProfile {
            name: self.name,
            age: self.age,
            height: self.height,
            weight: self.weight,
            visited_spots: self.visited_spots.into_iter().collect(),
            completed_activities: self.completed_activities,
            stats: self.stats,
            total_points: self.total_points,
        }
    }
}

/// Serialize a record into JSON for persistence.
pub fn record_to_json(record: &PlayerRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Deserialize JSON back into a record.
pub fn record_from_json(data: &str) -> serde_json::Result<PlayerRecord> {
    serde_json::from_str(data)
}

#[derive(Debug)]
pub enum ProfileStoreError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
}

impl std::fmt::Display for ProfileStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileStoreError::Io { path, source } => {
                write!(f, "failed to access {}: {}", path, source)
            }
            ProfileStoreError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ProfileStoreError {}

/// Storage seam for the saved profile. One attempt per call; retry policy
/// belongs to the caller.
pub trait ProfileRepository {
    fn load(&self) -> Result<Option<PlayerRecord>, Box<dyn std::error::Error>>;
    fn save(&mut self, record: &PlayerRecord) -> Result<(), Box<dyn std::error::Error>>;
}

pub struct JsonProfileRepository {
    path: PathBuf,
}

impl JsonProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing save file is a fresh start, not an error.
    pub fn load_record(&self) -> Result<Option<PlayerRecord>, ProfileStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ProfileStoreError::Io {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        let record = record_from_json(&raw).map_err(|source| ProfileStoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(Some(record))
    }

    pub fn save_record(&self, record: &PlayerRecord) -> Result<(), ProfileStoreError> {
        let json = record_to_json(record).map_err(|source| ProfileStoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ProfileStoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn load(&self) -> Result<Option<PlayerRecord>, Box<dyn std::error::Error>> {
        Ok(self.load_record()?)
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<(), Box<dyn std::error::Error>> {
        Ok(self.save_record(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::data::catalog::ActivityId;

    fn sample_profile() -> PlayerProfile {
        let mut visited_spots = HashSet::new();
        visited_spots.insert(SpotId(3));
        visited_spots.insert(SpotId(1));
        PlayerProfile {
            name: "Alex".to_string(),
            age: 30,
            height: 180,
            weight: 75,
            visited_spots,
            completed_activities: vec![
                CompletedActivity {
                    id: ActivityId(5),
                    name: "Morning Run".to_string(),
                },
                CompletedActivity {
                    id: ActivityId(2),
                    name: "Yoga".to_string(),
                },
                CompletedActivity {
                    id: ActivityId(5),
                    name: "Morning Run".to_string(),
                },
            ],
            stats: StatBlock {
                speed: 2,
                flexibility: 1,
                ..StatBlock::default()
            },
            total_points: 42,
        }
    }

    #[test]
    fn record_round_trip_preserves_profile() {
        let profile = sample_profile();
        let json = record_to_json(&PlayerRecord::from_profile(&profile)).unwrap();
        let restored = record_from_json(&json).unwrap().into_profile();

        assert_eq!(restored.name, profile.name);
        assert_eq!(restored.age, profile.age);
        assert_eq!(restored.height, profile.height);
        assert_eq!(restored.weight, profile.weight);
        assert_eq!(restored.visited_spots, profile.visited_spots);
        assert_eq!(restored.completed_activities, profile.completed_activities);
        assert_eq!(restored.stats, profile.stats);
        assert_eq!(restored.total_points, profile.total_points);
    }

    #[test]
    fn visited_spots_are_written_sorted() {
        let record = PlayerRecord::from_profile(&sample_profile());
        assert_eq!(record.visited_spots, vec![SpotId(1), SpotId(3)]);
    }

    #[test]
    fn record_json_matches_save_layout() {
        let record = PlayerRecord::from_profile(&sample_profile());
        let json = record_to_json(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Alex");
        assert_eq!(value["visited_spots"], serde_json::json!([1, 3]));
        assert_eq!(value["completed_activities"][0]["id"], 5);
        assert_eq!(value["completed_activities"][0]["name"], "Morning Run");
        assert_eq!(value["stats"]["Speed"], 2);
        assert_eq!(value["stats"]["Endurance"], 0);
        assert_eq!(value["total_points"], 42);
    }

    #[test]
    fn duplicate_log_entries_survive_round_trip() {
        let record = PlayerRecord::from_profile(&sample_profile());
        let restored = record.clone().into_profile();
        assert_eq!(restored.completed_activities.len(), 3);
        assert_eq!(restored.completed_activities[2].id, ActivityId(5));
    }

    #[test]
    fn missing_save_file_loads_none() {
        let path = std::env::temp_dir().join("active_quest_missing_save.json");
        let _ = fs::remove_file(&path);
        let store = JsonProfileRepository::new(&path);
        assert!(store.load_record().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_through_disk() {
        let path = std::env::temp_dir().join("active_quest_disk_round_trip.json");
        let store = JsonProfileRepository::new(&path);
        let record = PlayerRecord::from_profile(&sample_profile());

        store.save_record(&record).unwrap();
        let loaded = store.load_record().unwrap().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.name, record.name);
        assert_eq!(loaded.visited_spots, record.visited_spots);
        assert_eq!(loaded.completed_activities, record.completed_activities);
        assert_eq!(loaded.stats, record.stats);
        assert_eq!(loaded.total_points, record.total_points);
    }

    #[test]
    fn out_of_range_records_still_reconstitute() {
        let mut record = PlayerRecord::from_profile(&sample_profile());
        record.name = "Alex!".to_string();
        record.age = 0;
        let profile = record.into_profile();
        assert_eq!(profile.name, "Alex!");
        assert_eq!(profile.age, 0);
    }
}
