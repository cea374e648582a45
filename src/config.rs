use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};

use crate::fare::{DistanceTable, FareEngine, RateCard, RouteEntry};
use crate::schema::{COACH_MAP, FareClass, ROUTE_TABLE, STATION_MAP, TRAIN_MAP};
use crate::seat::SeatAssigner;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read network file {path}: {err}")]
    Read {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("invalid network file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("route {from} - {to} is not a pair of two different stations")]
    InvalidRoute { from: String, to: String },

    #[error("route {from} - {to} must have a positive distance")]
    NonPositiveDistance { from: String, to: String },

    #[error("route {from} - {to} is listed more than once")]
    DuplicateRoute { from: String, to: String },

    #[error("route uses unknown station {0}")]
    UnknownStation(String),

    #[error("rate for {class} must be positive, got {rate}")]
    NonPositiveRate { class: FareClass, rate: Decimal },

    #[error("at least one coach is required")]
    NoCoaches,

    #[error("invalid coach code {0:?}")]
    InvalidCoach(String),
}

/// Everything that describes the rail network a booking runs against.
///
/// The default is the built-in network. A JSON file with the same shape can
/// replace it; missing keys fall back to the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub stations: Vec<String>,
    pub trains: Vec<String>,
    pub routes: Vec<RouteEntry>,
    pub rates: RateCard,
    pub coaches: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            stations: STATION_MAP.iter().map(|s| s.to_string()).collect(),
            trains: TRAIN_MAP.iter().map(|s| s.to_string()).collect(),
            routes: ROUTE_TABLE
                .iter()
                .map(|&(from, to, km)| RouteEntry {
                    from: from.to_string(),
                    to: to.to_string(),
                    km,
                })
                .collect(),
            rates: RateCard::default(),
            coaches: COACH_MAP.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NetworkConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            err,
        })?;
        let config = Self::from_json(&body)?;
        tracing::info!(
            path = %path.display(),
            stations = config.stations.len(),
            routes = config.routes.len(),
            "loaded network file"
        );
        Ok(config)
    }

    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let config: NetworkConfig = serde_json::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for route in &self.routes {
            for station in [&route.from, &route.to] {
                if !self.stations.contains(station) {
                    return Err(ConfigError::UnknownStation(station.clone()));
                }
            }
        }
        self.fare_engine()?;
        self.seat_assigner()?;
        Ok(())
    }

    pub fn fare_engine(&self) -> Result<FareEngine, ConfigError> {
        let table = DistanceTable::try_from_routes(self.routes.iter().cloned())?;
        self.rates.validate()?;
        Ok(FareEngine::new(table, self.rates))
    }

    pub fn seat_assigner(&self) -> Result<SeatAssigner, ConfigError> {
        SeatAssigner::new(self.coaches.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_network_is_valid() {
        let config = NetworkConfig::default();
        config.validate().unwrap();
        assert_eq!(config.stations.len(), 6);
        assert_eq!(config.trains.len(), 5);
        assert_eq!(config.fare_engine().unwrap().table().len(), 10);
        assert_eq!(config.seat_assigner().unwrap().coaches().len(), 5);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = NetworkConfig::from_json(r#"{ "coaches": ["X9"] }"#).unwrap();
        assert_eq!(config.coaches, vec!["X9".to_string()]);
        assert_eq!(config.routes, NetworkConfig::default().routes);
    }

    #[test]
    fn custom_rates_change_fares() {
        let config = NetworkConfig::from_json(
            r#"{
                "rates": { "Sleeper": 1.0, "AC 3-Tier": 2.0, "AC 2-Tier": 3.0, "First Class": 4.0 }
            }"#,
        )
        .unwrap();
        let engine = config.fare_engine().unwrap();
        let fare = engine.compute_fare("Delhi", "Mumbai", FareClass::FirstClass).unwrap();
        assert_eq!(fare.to_string(), "5600.00");
    }

    #[test]
    fn rejects_route_to_unknown_station() {
        let err = NetworkConfig::from_json(
            r#"{ "routes": [ { "from": "Delhi", "to": "Pune", "km": 1450 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStation(s) if s == "Pune"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            NetworkConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let err = NetworkConfig::from_json(
            r#"{ "rates": { "Sleeper": 1.2, "AC 3-Tier": 0, "AC 2-Tier": 3.5, "First Class": 5.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveRate {
                class: FareClass::Ac3Tier,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_coach_list() {
        assert!(matches!(
            NetworkConfig::from_json(r#"{ "coaches": [] }"#),
            Err(ConfigError::NoCoaches)
        ));
    }

    #[test]
    fn load_reads_file_and_reports_missing_ones() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "trains": ["Night Mail"] }}"#).unwrap();
        let config = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(config.trains, vec!["Night Mail".to_string()]);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            NetworkConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));
    }
}
