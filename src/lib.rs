pub mod booking;
pub mod cli;
pub mod config;
pub mod fare;
pub mod schema;
pub mod seat;
pub mod ticket;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::io::BufRead;
use std::path::PathBuf;

use crate::booking::{BookingRecord, BookingRejection};
use crate::cli::Args;
use crate::config::NetworkConfig;

/// How a single run of the booking flow ended.
#[derive(Debug)]
pub enum Outcome {
    Booked {
        record: BookingRecord,
        ticket: PathBuf,
    },
    Declined(BookingRecord),
    Rejected(BookingRejection),
}

fn get_input<R: BufRead>(input: &mut R, hint: &str) -> String {
    println!("{hint}");
    let mut line = String::new();
    if let Err(err) = input.read_line(&mut line) {
        tracing::warn!(%err, hint, "could not read answer, treating it as empty");
    }
    line.trim().to_string()
}

pub fn load_config(args: &Args) -> Result<NetworkConfig> {
    match &args.config {
        Some(path) => NetworkConfig::load(path)
            .with_context(|| format!("Failed to load network file {}", path.display())),
        None => Ok(NetworkConfig::default()),
    }
}

pub fn run<R: BufRead>(args: &Args, config: &NetworkConfig, input: &mut R) -> Result<Outcome> {
    let engine = config.fare_engine()?;
    let assigner = config.seat_assigner()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let request = booking_flow::collect_request(input, args, config);

    let booking = match request.validate(&engine) {
        Ok(booking) => booking,
        Err(rejection) => {
            println!("{}: {}", rejection.title(), rejection.message());
            return Ok(Outcome::Rejected(rejection));
        }
    };

    let record = booking.into_record(assigner.assign(&mut rng));

    if !confirm_flow::run_flow(input, args, &record) {
        println!("Booking cancelled.");
        return Ok(Outcome::Declined(record));
    }

    let ticket = ticket::write(&record, &args.output_dir)?;
    println!(
        "Ticket booked successfully!\nSaved as {}",
        ticket.display()
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(Outcome::Booked { record, ticket })
}

// Collect the form fields, prompting for whatever was not given as a flag
pub mod booking_flow {
    use super::*;
    use crate::booking::BookingRequest;
    use crate::schema::FareClass;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    pub fn collect_request<R: BufRead>(
        input: &mut R,
        args: &Args,
        config: &NetworkConfig,
    ) -> BookingRequest {
        let name = args
            .name
            .clone()
            .unwrap_or_else(|| get_input(input, "Passenger name:"));
        let age = args.age.clone().unwrap_or_else(|| get_input(input, "Age:"));
        let date = args
            .date
            .clone()
            .unwrap_or_else(|| get_input(input, "Date (DD/MM/YYYY):"));
        let source = args
            .from
            .clone()
            .unwrap_or_else(|| select_from(input, "Please select source station:", &config.stations));
        let destination = args.to.clone().unwrap_or_else(|| {
            select_from(input, "Please select destination station:", &config.stations)
        });
        let train = args
            .train
            .clone()
            .unwrap_or_else(|| select_from(input, "Please select train:", &config.trains));
        let fare_class = args.class.or_else(|| select_class(input));

        BookingRequest {
            name,
            age,
            source,
            destination,
            train,
            date,
            fare_class,
        }
    }

    /// Numbered pick list. A number selects that entry; anything else is
    /// taken as typed, so an empty answer stays empty.
    pub fn select_from<R: BufRead>(input: &mut R, hint: &str, options: &[String]) -> String {
        for (i, option) in options.iter().enumerate() {
            println!("{}: {}", i + 1, option);
        }
        let answer = get_input(input, hint);
        match answer.parse::<usize>() {
            Ok(idx) if idx > 0 && idx <= options.len() => options[idx - 1].clone(),
            _ => answer,
        }
    }

    fn select_class<R: BufRead>(input: &mut R) -> Option<FareClass> {
        let classes: Vec<String> = FareClass::iter().map(|c| c.to_string()).collect();
        let answer = select_from(input, "Please select seat class:", &classes);
        if answer.is_empty() {
            return None;
        }
        match FareClass::from_str(&answer) {
            Ok(class) => Some(class),
            Err(_) => {
                println!("Unknown class {answer:?}.");
                None
            }
        }
    }
}

// Show the summary and ask before writing anything
pub mod confirm_flow {
    use super::*;

    pub fn run_flow<R: BufRead>(input: &mut R, args: &Args, record: &BookingRecord) -> bool {
        println!("{}\n", ticket::summary(record));
        if args.yes {
            return true;
        }
        matches!(
            get_input(input, "Confirm booking? (y/n, default: n):")
                .to_ascii_lowercase()
                .as_str(),
            "y" | "yes"
        )
    }
}
