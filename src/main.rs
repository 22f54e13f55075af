use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use active_quest::data::catalog::{load_catalog, ActivityId, Catalog, ServiceId, SpotId};
use active_quest::persistence::store::{JsonProfileRepository, PlayerRecord, ProfileRepository};
use active_quest::player::profile::{
    validate_age, validate_height, validate_name, validate_weight, PlayerProfile,
    ProfileValidationError,
};
use active_quest::rules::progression::{
    edit_profile, perform_activity, purchase_service, visit_spot, ProgressionError,
};
use active_quest::ui::views::{
    render_activity_list, render_help, render_logs, render_menu, render_service_list,
    render_spot_list, render_stats,
};

fn main() {
    let paths = parse_paths(env::args().collect());

    let catalog = match load_catalog(&paths.spots, &paths.activities, &paths.services) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Failed to load catalog: {}", err);
            std::process::exit(1);
        }
    };

    let mut store = JsonProfileRepository::new(&paths.save);
    let mut input = io::stdin().lock();
    let mut profile = match store.load() {
        Ok(Some(record)) => {
            let profile = record.into_profile();
            println!("Welcome back, {}!", profile.name);
            profile
        }
        Ok(None) => match create_player(&mut input) {
            Some(profile) => profile,
            // Input ended before a character existed; nothing to save yet.
            None => return,
        },
        Err(err) => {
            eprintln!("Failed to load save file: {}", err);
            std::process::exit(1);
        }
    };

    print!("{}", render_menu());
    loop {
        print!("Choose an option (type 'menu' to see options again): ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.to_lowercase().as_str() {
            "menu" => print!("{}", render_menu()),
            "1" => run_edit_info(&mut input, &mut profile),
            "2" => run_visit_spot(&mut input, &catalog, &mut profile),
            "3" => run_perform_activity(&mut input, &catalog, &mut profile),
            "4" => print!("{}", render_stats(&profile)),
            "5" => print!("{}", render_logs(&profile, &catalog)),
            "6" => print!("{}", render_service_list(&catalog)),
            "7" => run_use_service(&mut input, &catalog, &mut profile),
            "8" => print!("{}", render_help()),
            "9" => {
                println!("Saving progress... Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    // Exit always persists, whether through option 9 or end of input.
    if let Err(err) = store.save(&PlayerRecord::from_profile(&profile)) {
        eprintln!("Failed to save progress: {}", err);
        std::process::exit(1);
    }
}

struct DataPaths {
    spots: PathBuf,
    activities: PathBuf,
    services: PathBuf,
    save: PathBuf,
}

fn parse_paths(args: Vec<String>) -> DataPaths {
    let mut iter = args.iter();
    let mut paths = DataPaths {
        spots: PathBuf::from("./assets/data/active_spots.json"),
        activities: PathBuf::from("./assets/data/activities.json"),
        services: PathBuf::from("./assets/data/services.json"),
        save: PathBuf::from("player_data.json"),
    };
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--spots" => {
                if let Some(value) = iter.next() {
                    paths.spots = PathBuf::from(value);
                }
            }
            "--activities" => {
                if let Some(value) = iter.next() {
                    paths.activities = PathBuf::from(value);
                }
            }
            "--services" => {
                if let Some(value) = iter.next() {
                    paths.services = PathBuf::from(value);
                }
            }
            "--save" => {
                if let Some(value) = iter.next() {
                    paths.save = PathBuf::from(value);
                }
            }
            _ => {}
        }
    }
    paths
}

/// Reads one line, trimmed. `None` means the input stream is finished and
/// the caller should wind the session down instead of re-prompting.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt_number(input: &mut impl BufRead, prompt: &str) -> Option<u32> {
    loop {
        let raw = prompt_line(input, prompt)?;
        match raw.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_validated_number(
    input: &mut impl BufRead,
    prompt: &str,
    validate: fn(u32) -> Result<(), ProfileValidationError>,
) -> Option<u32> {
    loop {
        let value = prompt_number(input, prompt)?;
        match validate(value) {
            Ok(()) => return Some(value),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_name(input: &mut impl BufRead) -> Option<String> {
    loop {
        let raw = prompt_line(input, "Enter your name: ")?;
        match validate_name(&raw) {
            Ok(()) => return Some(raw),
            Err(err) => println!("{}", err),
        }
    }
}

fn create_player(input: &mut impl BufRead) -> Option<PlayerProfile> {
    println!("Welcome to ActiveQuest! Let's create your character.");
    loop {
        let name = prompt_name(input)?;
        let age = prompt_validated_number(input, "Enter your age: ", validate_age)?;
        let height =
            prompt_validated_number(input, "Enter your height (in cm): ", validate_height)?;
        let weight =
            prompt_validated_number(input, "Enter your weight (in kg): ", validate_weight)?;
        match PlayerProfile::new(&name, age, height, weight) {
            Ok(profile) => {
                println!("Character created! Welcome, {}!", profile.name);
                return Some(profile);
            }
            Err(err) => println!("{}", err),
        }
    }
}

fn run_edit_info(input: &mut impl BufRead, profile: &mut PlayerProfile) {
    println!("Edit Player Information:");
    let Some(name) = prompt_line(input, "Enter your name: ") else {
        return;
    };
    let Some(age) = prompt_number(input, "Enter your age: ") else {
        return;
    };
    let Some(height) = prompt_number(input, "Enter your height (in cm): ") else {
        return;
    };
    let Some(weight) = prompt_number(input, "Enter your weight (in kg): ") else {
        return;
    };
    match edit_profile(profile, &name, age, height, weight) {
        Ok(()) => println!("Player information updated successfully!"),
        Err(err) => println!("Update rejected: {}", err),
    }
}

fn run_visit_spot(input: &mut impl BufRead, catalog: &Catalog, profile: &mut PlayerProfile) {
    print!("{}", render_spot_list(catalog));
    let Some(raw) = prompt_line(input, "Enter the number of the active spot you want to visit: ")
    else {
        return;
    };
    let Ok(id) = raw.parse::<i64>() else {
        println!("Invalid choice. Returning to the menu.");
        return;
    };
    match visit_spot(catalog, profile, SpotId(id)) {
        Ok(outcome) if outcome.first_visit => println!(
            "You visited {} for the first time! You earned {} points!",
            outcome.spot_name, outcome.points_awarded
        ),
        Ok(outcome) => println!("You revisited {}.", outcome.spot_name),
        Err(err) => println!("{}", err),
    }
}

fn run_perform_activity(input: &mut impl BufRead, catalog: &Catalog, profile: &mut PlayerProfile) {
    print!("{}", render_activity_list(catalog));
    let Some(raw) = prompt_line(input, "Enter the number of the activity you want to perform: ")
    else {
        return;
    };
    let Ok(id) = raw.parse::<i64>() else {
        println!("Invalid choice. Returning to the menu.");
        return;
    };
    match perform_activity(catalog, profile, ActivityId(id)) {
        Ok(outcome) => {
            if outcome.first_time {
                println!(
                    "You performed {} for the first time! You earned {} points!",
                    outcome.activity_name, outcome.points_awarded
                );
            } else {
                println!(
                    "You performed {} and earned {} points.",
                    outcome.activity_name, outcome.points_awarded
                );
            }
            report_skipped(&outcome.skipped_boosts);
        }
        Err(err) => println!("{}", err),
    }
}

fn run_use_service(input: &mut impl BufRead, catalog: &Catalog, profile: &mut PlayerProfile) {
    print!("{}", render_service_list(catalog));
    let Some(raw) = prompt_line(input, "Enter the number of the service you want to use: ") else {
        return;
    };
    let Ok(id) = raw.parse::<i64>() else {
        println!("Invalid choice. Returning to the menu.");
        return;
    };
    match purchase_service(catalog, profile, ServiceId(id)) {
        Ok(outcome) => {
            println!(
                "You used {} and improved your stats! ({} points spent)",
                outcome.service_name, outcome.points_spent
            );
            report_skipped(&outcome.skipped_boosts);
        }
        Err(ProgressionError::InsufficientPoints { cost, balance }) => println!(
            "Not enough points to use this service (cost {}, balance {}).",
            cost, balance
        ),
        Err(err) => println!("{}", err),
    }
}

fn report_skipped(skipped: &[String]) {
    for tag in skipped {
        println!("Warning: {} is not a valid stat and was skipped.", tag);
    }
}
