use crate::data::catalog::{Catalog, SpotId};
use crate::player::PlayerProfile;
use crate::rules::stats::StatKind;

pub fn render_menu() -> String {
    let mut output = String::new();
    output.push_str("******************************\n");
    output.push_str("1. Edit Info  2. Visit Spot  3. Activity  4. Stats\n");
    output.push_str("5. Logs       6. Services    7. Use Svc   8. Help\n");
    output.push_str("9. Exit\n");
    output.push_str("******************************\n");
    output
}

pub fn render_stats(profile: &PlayerProfile) -> String {
    let mut output = String::new();
    output.push_str("Player Stats:\n");
    output.push_str(&format!(
        "Name: {}, Age: {}, Height: {} cm, Weight: {} kg\n",
        profile.name, profile.age, profile.height, profile.weight
    ));
    for kind in StatKind::ALL {
        output.push_str(&format!("{}: {}\n", kind.label(), profile.stats.get(kind)));
    }
    output.push_str(&format!("Total Points: {}\n", profile.total_points));
    output
}

/// Activity names in performance order, then visited spots resolved through
/// the catalog. A visited id no longer in the catalog is skipped.
pub fn render_logs(profile: &PlayerProfile, catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("Activity Log:\n");
    for entry in &profile.completed_activities {
        output.push_str(&format!("- {}\n", entry.name));
    }
    output.push_str("\nVisited Spots:\n");
    let mut visited: Vec<SpotId> = profile.visited_spots.iter().copied().collect();
    visited.sort_by_key(|id| id.0);
    for id in visited {
        if let Some(spot) = catalog.find_spot(id) {
            output.push_str(&format!("- {}\n", spot.name));
        }
    }
    output
}

pub fn render_spot_list(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("Available Active Spots:\n");
    for spot in catalog.spots() {
        output.push_str(&format!(
            "{}. {} ({}) - Bonus Points: {}\n",
            spot.id.0, spot.name, spot.category, spot.bonus_points
        ));
    }
    output
}

pub fn render_activity_list(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("Available Activities:\n");
    for activity in catalog.activities() {
        output.push_str(&format!(
            "{}. {} - Base Points: {}, First-Time Bonus: {}, Duration: {} min\n",
            activity.id.0,
            activity.name,
            activity.base_points,
            activity.first_time_bonus,
            activity.duration
        ));
    }
    output
}

pub fn render_service_list(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("Available Services:\n");
    for service in catalog.services() {
        output.push_str(&format!(
            "{}. {} - Cost: {} points",
            service.id.0, service.name, service.cost
        ));
        let linked = service
            .linked_active_spot_id
            .and_then(|id| catalog.find_spot(id));
        if let Some(spot) = linked {
            output.push_str(&format!(" (at {})", spot.name));
        }
        output.push('\n');
    }
    output
}

pub fn render_help() -> String {
    let mut output = String::new();
    output.push_str("Help Menu:\n");
    output.push_str("1. Edit Info: Update your personal details.\n");
    output.push_str("2. Visit Spot: Go to a location to earn points.\n");
    output.push_str("3. Activity: Complete an activity to earn points and improve stats.\n");
    output.push_str("4. Stats: Check your stats, total points, and personal information.\n");
    output.push_str("5. Logs: See all activities you've done and spots you've visited.\n");
    output.push_str("6. Services: List of available services and their costs.\n");
    output.push_str("7. Use Svc: Spend points on a service to improve your stats.\n");
    output.push_str("8. Help: View this help menu.\n");
    output.push_str("9. Exit: Save your progress and exit the game.\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{Activity, ActivityId, Service, ServiceId, Spot};

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![Spot {
                id: SpotId(1),
                name: "Central Park".to_string(),
                location: "Downtown".to_string(),
                category: "Park".to_string(),
                available_activities: vec![],
                bonus_points: 10,
            }],
            vec![Activity {
                id: ActivityId(5),
                name: "Morning Run".to_string(),
                skill_boosts: vec!["Speed".to_string()],
                base_points: 3,
                first_time_bonus: 7,
                duration: 30,
            }],
            vec![
                Service {
                    id: ServiceId(2),
                    name: "Sauna".to_string(),
                    skill_boosts: vec![],
                    cost: 8,
                    linked_active_spot_id: Some(SpotId(1)),
                },
                Service {
                    id: ServiceId(3),
                    name: "Home Massage".to_string(),
                    skill_boosts: vec![],
                    cost: 12,
                    linked_active_spot_id: Some(SpotId(99)),
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn spot_lines_show_category_and_bonus() {
        let listing = render_spot_list(&sample_catalog());
        assert!(listing.contains("1. Central Park (Park) - Bonus Points: 10"));
    }

    #[test]
    fn activity_lines_show_points_and_duration() {
        let listing = render_activity_list(&sample_catalog());
        assert!(listing
            .contains("5. Morning Run - Base Points: 3, First-Time Bonus: 7, Duration: 30 min"));
    }

    #[test]
    fn service_lines_resolve_linked_spot_when_present() {
        let listing = render_service_list(&sample_catalog());
        assert!(listing.contains("2. Sauna - Cost: 8 points (at Central Park)"));
        assert!(listing.contains("3. Home Massage - Cost: 12 points\n"));
    }

    #[test]
    fn logs_skip_visited_ids_missing_from_catalog() {
        let catalog = sample_catalog();
        let mut profile = PlayerProfile::new("Alex", 30, 180, 75).unwrap();
        profile.visited_spots.insert(SpotId(1));
        profile.visited_spots.insert(SpotId(99));

        let logs = render_logs(&profile, &catalog);
        assert!(logs.contains("- Central Park"));
        assert_eq!(logs.matches("- ").count(), 1);
    }

    #[test]
    fn stats_view_lists_all_five_stats() {
        let profile = PlayerProfile::new("Alex", 30, 180, 75).unwrap();
        let view = render_stats(&profile);
        for kind in StatKind::ALL {
            assert!(view.contains(&format!("{}: 0", kind.label())));
        }
        assert!(view.contains("Total Points: 0"));
    }
}
