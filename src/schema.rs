use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub static STATION_MAP: [&str; 6] = ["Delhi", "Mumbai", "Chennai", "Kolkata", "Bangalore", "Jaipur"];

pub static TRAIN_MAP: [&str; 5] = [
    "Rajdhani Express",
    "Shatabdi Express",
    "Duronto Express",
    "Vande Bharat",
    "Garib Rath",
];

/// Point-to-point distances in km. Each pair is listed in one orientation only.
pub static ROUTE_TABLE: [(&str, &str, u32); 10] = [
    ("Delhi", "Mumbai", 1400),
    ("Delhi", "Kolkata", 1500),
    ("Delhi", "Chennai", 2200),
    ("Delhi", "Bangalore", 2150),
    ("Mumbai", "Chennai", 1300),
    ("Kolkata", "Chennai", 1650),
    ("Jaipur", "Delhi", 280),
    ("Mumbai", "Jaipur", 1150),
    ("Bangalore", "Kolkata", 1850),
    ("Bangalore", "Chennai", 350),
];

pub static COACH_MAP: [&str; 5] = ["S1", "S2", "B1", "A1", "FC1"];

pub const SEATS_PER_COACH: u8 = 72;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FareClass {
    #[strum(serialize = "Sleeper")]
    Sleeper,
    #[strum(serialize = "AC 3-Tier")]
    #[serde(rename = "AC 3-Tier")]
    Ac3Tier,
    #[strum(serialize = "AC 2-Tier")]
    #[serde(rename = "AC 2-Tier")]
    Ac2Tier,
    #[strum(serialize = "First Class")]
    #[serde(rename = "First Class")]
    FirstClass,
}
