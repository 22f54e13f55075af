pub mod catalog;

pub use catalog::{
    load_catalog, Activity, ActivityId, Catalog, CatalogDataError, Service, ServiceId, Spot,
    SpotId,
};
