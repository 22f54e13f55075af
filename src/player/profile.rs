use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::catalog::{ActivityId, SpotId};
use crate::rules::stats::StatBlock;

const AGE_RANGE: (u32, u32) = (1, 120);
const HEIGHT_RANGE: (u32, u32) = (50, 250);
const WEIGHT_RANGE: (u32, u32) = (10, 300);

/// One entry in the append-only activity log. Repeats append again; only
/// the first occurrence of an id gates the first-time bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedActivity {
    pub id: ActivityId,
    pub name: String,
}

/// The sole unit of durable state: identity, claimed-bonus markers, the
/// activity log, stat counters, and the point balance.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub age: u32,
    pub height: u32,
    pub weight: u32,
    pub visited_spots: HashSet<SpotId>,
    pub completed_activities: Vec<CompletedActivity>,
    pub stats: StatBlock,
    pub total_points: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    InvalidNameCharacter(char),
    AgeOutOfRange(u32),
    HeightOutOfRange(u32),
    WeightOutOfRange(u32),
}

impl std::fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileValidationError::EmptyName => write!(f, "name cannot be empty"),
            ProfileValidationError::InvalidNameCharacter(found) => {
                write!(f, "name may only contain letters, digits, and spaces (found {:?})", found)
            }
            ProfileValidationError::AgeOutOfRange(age) => {
                write!(f, "age {} must be between {} and {}", age, AGE_RANGE.0, AGE_RANGE.1)
            }
            ProfileValidationError::HeightOutOfRange(height) => write!(
                f,
                "height {} cm must be between {} and {}",
                height, HEIGHT_RANGE.0, HEIGHT_RANGE.1
            ),
            ProfileValidationError::WeightOutOfRange(weight) => write!(
                f,
                "weight {} kg must be between {} and {}",
                weight, WEIGHT_RANGE.0, WEIGHT_RANGE.1
            ),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

pub fn validate_name(name: &str) -> Result<(), ProfileValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProfileValidationError::EmptyName);
    }
    if let Some(found) = trimmed.chars().find(|c| !c.is_alphanumeric() && *c != ' ') {
        return Err(ProfileValidationError::InvalidNameCharacter(found));
    }
    Ok(())
}

pub fn validate_age(age: u32) -> Result<(), ProfileValidationError> {
    if age < AGE_RANGE.0 || age > AGE_RANGE.1 {
        return Err(ProfileValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

pub fn validate_height(height: u32) -> Result<(), ProfileValidationError> {
    if height < HEIGHT_RANGE.0 || height > HEIGHT_RANGE.1 {
        return Err(ProfileValidationError::HeightOutOfRange(height));
    }
    Ok(())
}

pub fn validate_weight(weight: u32) -> Result<(), ProfileValidationError> {
    if weight < WEIGHT_RANGE.0 || weight > WEIGHT_RANGE.1 {
        return Err(ProfileValidationError::WeightOutOfRange(weight));
    }
    Ok(())
}

/// Check all four identity fields without touching any profile. Callers
/// apply the fields only after this returns `Ok`.
pub fn validate_identity(
    name: &str,
    age: u32,
    height: u32,
    weight: u32,
) -> Result<(), ProfileValidationError> {
    validate_name(name)?;
    validate_age(age)?;
    validate_height(height)?;
    validate_weight(weight)?;
    Ok(())
}

impl PlayerProfile {
    /// Build a fresh profile with zeroed progress. Identity fields are
    /// validated up front; the stored name is trimmed.
    pub fn new(
        name: &str,
        age: u32,
        height: u32,
        weight: u32,
    ) -> Result<Self, ProfileValidationError> {
        validate_identity(name, age, height, weight)?;
        Ok(Self {
            name: name.trim().to_string(),
            age,
            height,
            weight,
            visited_spots: HashSet::new(),
            completed_activities: Vec::new(),
            stats: StatBlock::default(),
            total_points: 0,
        })
    }

    pub fn has_visited(&self, id: SpotId) -> bool {
        self.visited_spots.contains(&id)
    }

    pub fn has_completed(&self, id: ActivityId) -> bool {
        self.completed_activities.iter().any(|entry| entry.id == id)
    }
}
