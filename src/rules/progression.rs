use crate::data::catalog::{ActivityId, Catalog, ServiceId, SpotId};
use crate::player::{validate_identity, CompletedActivity, PlayerProfile, ProfileValidationError};
use crate::rules::stats::apply_boosts;

#[derive(Debug)]
pub struct VisitOutcome {
    pub spot_name: String,
    pub first_visit: bool,
    pub points_awarded: i64,
}

#[derive(Debug)]
pub struct ActivityOutcome {
    pub activity_name: String,
    pub first_time: bool,
    pub points_awarded: i64,
    pub skipped_boosts: Vec<String>,
}

#[derive(Debug)]
pub struct ServiceOutcome {
    pub service_name: String,
    pub points_spent: i64,
    pub skipped_boosts: Vec<String>,
}

#[derive(Debug)]
pub enum ProgressionError {
    SpotNotFound(SpotId),
    ActivityNotFound(ActivityId),
    ServiceNotFound(ServiceId),
    InsufficientPoints { cost: i64, balance: i64 },
}

impl std::fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressionError::SpotNotFound(id) => write!(f, "no active spot with id {}", id.0),
            ProgressionError::ActivityNotFound(id) => write!(f, "no activity with id {}", id.0),
            ProgressionError::ServiceNotFound(id) => write!(f, "no service with id {}", id.0),
            ProgressionError::InsufficientPoints { cost, balance } => {
                write!(f, "costs {} points but only {} available", cost, balance)
            }
        }
    }
}

impl std::error::Error for ProgressionError {}

/// The bonus is claimed at most once per spot; revisits are free, unlimited,
/// and award nothing.
pub fn visit_spot(
    catalog: &Catalog,
    profile: &mut PlayerProfile,
    id: SpotId,
) -> Result<VisitOutcome, ProgressionError> {
    let spot = catalog
        .find_spot(id)
        .ok_or(ProgressionError::SpotNotFound(id))?;
    if profile.has_visited(id) {
        return Ok(VisitOutcome {
            spot_name: spot.name.clone(),
            first_visit: false,
            points_awarded: 0,
        });
    }
    profile.visited_spots.insert(id);
    profile.total_points += spot.bonus_points;
    Ok(VisitOutcome {
        spot_name: spot.name.clone(),
        first_visit: true,
        points_awarded: spot.bonus_points,
    })
}

/// Every call earns base points, appends to the log, and applies boosts;
/// the first-time bonus is gated on log membership before this append.
pub fn perform_activity(
    catalog: &Catalog,
    profile: &mut PlayerProfile,
    id: ActivityId,
) -> Result<ActivityOutcome, ProgressionError> {
    let activity = catalog
        .find_activity(id)
        .ok_or(ProgressionError::ActivityNotFound(id))?;
    let first_time = !profile.has_completed(id);
    let points_awarded = activity.base_points
        + if first_time {
            activity.first_time_bonus
        } else {
            0
        };
    let (stats, skipped_boosts) = apply_boosts(&profile.stats, &activity.skill_boosts);
    profile.total_points += points_awarded;
    profile.stats = stats;
    profile.completed_activities.push(CompletedActivity {
        id,
        name: activity.name.clone(),
    });
    Ok(ActivityOutcome {
        activity_name: activity.name.clone(),
        first_time,
        points_awarded,
        skipped_boosts,
    })
}

/// Solvency is checked before any mutation; a short balance rejects the
/// purchase outright instead of clamping.
pub fn purchase_service(
    catalog: &Catalog,
    profile: &mut PlayerProfile,
    id: ServiceId,
) -> Result<ServiceOutcome, ProgressionError> {
    let service = catalog
        .find_service(id)
        .ok_or(ProgressionError::ServiceNotFound(id))?;
    if profile.total_points < service.cost {
        return Err(ProgressionError::InsufficientPoints {
            cost: service.cost,
            balance: profile.total_points,
        });
    }
    let (stats, skipped_boosts) = apply_boosts(&profile.stats, &service.skill_boosts);
    profile.total_points -= service.cost;
    profile.stats = stats;
    Ok(ServiceOutcome {
        service_name: service.name.clone(),
        points_spent: service.cost,
        skipped_boosts,
    })
}

/// Atomic identity edit: all four fields are validated before any is
/// applied, so a rejected edit leaves the profile untouched.
pub fn edit_profile(
    profile: &mut PlayerProfile,
    name: &str,
    age: u32,
    height: u32,
    weight: u32,
) -> Result<(), ProfileValidationError> {
    validate_identity(name, age, height, weight)?;
    profile.name = name.trim().to_string();
    profile.age = age;
    profile.height = height;
    profile.weight = weight;
    Ok(())
}
