use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub i64);

/// A location the player can visit for a one-time bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub available_activities: Vec<ActivityId>,
    pub bonus_points: i64,
}

/// A repeatable action granting base points, a one-time bonus, and stat boosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    #[serde(default)]
    pub skill_boosts: Vec<String>,
    pub base_points: i64,
    pub first_time_bonus: i64,
    pub duration: i64,
}

/// A purchase that costs points and grants stat boosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub skill_boosts: Vec<String>,
    pub cost: i64,
    #[serde(default)]
    pub linked_active_spot_id: Option<SpotId>,
}

/// Immutable reference data for one session. Construction validates; lookups
/// compare ids natively and return `None` for unknown ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    spots: Vec<Spot>,
    activities: Vec<Activity>,
    services: Vec<Service>,
}

#[derive(Debug)]
pub enum CatalogDataError {
    Io { path: String, source: std::io::Error },
    Json { path: String, source: serde_json::Error },
    Validation(String),
}

impl std::fmt::Display for CatalogDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogDataError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            CatalogDataError::Json { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            CatalogDataError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CatalogDataError {}

/// Load the three catalog files and build a validated `Catalog`.
pub fn load_catalog(
    spots_path: impl AsRef<Path>,
    activities_path: impl AsRef<Path>,
    services_path: impl AsRef<Path>,
) -> Result<Catalog, CatalogDataError> {
    let spots = read_entries(spots_path.as_ref())?;
    let activities = read_entries(activities_path.as_ref())?;
    let services = read_entries(services_path.as_ref())?;
    Catalog::new(spots, activities, services)
}

fn read_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogDataError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogDataError::Json {
        path: path.display().to_string(),
        source,
    })
}

impl Catalog {
    pub fn new(
        spots: Vec<Spot>,
        activities: Vec<Activity>,
        services: Vec<Service>,
    ) -> Result<Self, CatalogDataError> {
        let catalog = Self {
            spots,
            activities,
            services,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogDataError> {
        let mut spot_ids = HashSet::new();
        for spot in &self.spots {
            if !spot_ids.insert(spot.id) {
                return Err(CatalogDataError::Validation(format!(
                    "duplicate spot id {}",
                    spot.id.0
                )));
            }
            if spot.bonus_points < 0 {
                return Err(CatalogDataError::Validation(format!(
                    "spot {} has negative bonus_points",
                    spot.id.0
                )));
            }
        }
        let mut activity_ids = HashSet::new();
        for activity in &self.activities {
            if !activity_ids.insert(activity.id) {
                return Err(CatalogDataError::Validation(format!(
                    "duplicate activity id {}",
                    activity.id.0
                )));
            }
            if activity.base_points < 0 {
                return Err(CatalogDataError::Validation(format!(
                    "activity {} has negative base_points",
                    activity.id.0
                )));
            }
            if activity.first_time_bonus < 0 {
                return Err(CatalogDataError::Validation(format!(
                    "activity {} has negative first_time_bonus",
                    activity.id.0
                )));
            }
        }
        let mut service_ids = HashSet::new();
        for service in &self.services {
            if !service_ids.insert(service.id) {
                return Err(CatalogDataError::Validation(format!(
                    "duplicate service id {}",
                    service.id.0
                )));
            }
            if service.cost < 0 {
                return Err(CatalogDataError::Validation(format!(
                    "service {} has negative cost",
                    service.id.0
                )));
            }
        }
        // A service's linked_active_spot_id may dangle; it is display-only.
        Ok(())
    }

    pub fn find_spot(&self, id: SpotId) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    pub fn find_activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    pub fn find_service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }
}
