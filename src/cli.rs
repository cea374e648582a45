use clap::Parser;

use std::path::PathBuf;

use crate::schema::FareClass;

/// A CLI tool for booking Indian Railways tickets.
/// Run the program without flags and it will prompt for every field.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Passenger name
    #[arg(long, short = 'n', value_name = "NAME")]
    pub name: Option<String>,

    /// Passenger age
    #[arg(long, short = 'a', value_name = "AGE")]
    pub age: Option<String>,

    /// Source station name.
    /// To see available stations, use the --list-station option.
    #[arg(long, short = 'f', value_name = "STATION")]
    pub from: Option<String>,

    /// Destination station name.
    /// To see available stations, use the --list-station option.
    #[arg(long, short = 't', value_name = "STATION")]
    pub to: Option<String>,

    /// Train name.
    /// To see available trains, use the --list-train option.
    #[arg(long, short = 'T', value_name = "TRAIN")]
    pub train: Option<String>,

    /// Date of journey (DD/MM/YYYY)
    #[arg(long, short = 'd', value_name = "DATE")]
    pub date: Option<String>,

    /// Fare class: "Sleeper", "AC 3-Tier", "AC 2-Tier" or "First Class"
    #[arg(long, short = 'c', value_name = "CLASS")]
    pub class: Option<FareClass>,

    /// Book without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Seed for coach and seat assignment
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory the ticket is written to
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also print the booking as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON file describing stations, trains, routes, rates and coaches
    #[arg(long, value_name = "PATH", env = "RAILBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// List available stations
    #[arg(long)]
    pub list_station: bool,

    /// List available trains
    #[arg(long)]
    pub list_train: bool,

    /// List fare classes and their per-km rates
    #[arg(long)]
    pub list_class: bool,

    /// List known routes and distances
    #[arg(long)]
    pub list_route: bool,
}
