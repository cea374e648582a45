use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};

use std::collections::HashMap;
use std::fmt;

use crate::config::ConfigError;
use crate::schema::FareClass;

/// One table row: the distance between two stations, in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub km: u32,
}

/// Read-only distance lookup. Rows are stored in the orientation they were
/// given and `lookup_distance` tries both.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<String, HashMap<String, u32>>,
    len: usize,
}

impl DistanceTable {
    pub fn try_from_routes<I>(routes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = RouteEntry>,
    {
        let mut table = DistanceTable::default();
        for RouteEntry { from, to, km } in routes {
            if from.trim().is_empty() || to.trim().is_empty() || from == to {
                return Err(ConfigError::InvalidRoute { from, to });
            }
            if km == 0 {
                return Err(ConfigError::NonPositiveDistance { from, to });
            }
            if table.lookup_distance(&from, &to).is_some() {
                return Err(ConfigError::DuplicateRoute { from, to });
            }
            table.distances.entry(from).or_default().insert(to, km);
            table.len += 1;
        }
        Ok(table)
    }

    fn directed(&self, from: &str, to: &str) -> Option<u32> {
        self.distances.get(from)?.get(to).copied()
    }

    pub fn lookup_distance(&self, source: &str, destination: &str) -> Option<u32> {
        self.directed(source, destination)
            .or_else(|| self.directed(destination, source))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All rows, sorted by station names so listings are stable.
    pub fn routes(&self) -> Vec<RouteEntry> {
        let mut routes: Vec<RouteEntry> = self
            .distances
            .iter()
            .flat_map(|(from, row)| {
                row.iter().map(move |(to, &km)| RouteEntry {
                    from: from.clone(),
                    to: to.clone(),
                    km,
                })
            })
            .collect();
        routes.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        routes
    }
}

/// Rupees per km for every fare class. Held as decimals so a rate such as
/// 1.005 from a network file is exactly 1.005.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(rename = "Sleeper")]
    pub sleeper: Decimal,
    #[serde(rename = "AC 3-Tier")]
    pub ac_3_tier: Decimal,
    #[serde(rename = "AC 2-Tier")]
    pub ac_2_tier: Decimal,
    #[serde(rename = "First Class")]
    pub first_class: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        RateCard {
            sleeper: Decimal::new(12, 1),
            ac_3_tier: Decimal::new(25, 1),
            ac_2_tier: Decimal::new(35, 1),
            first_class: Decimal::new(5, 0),
        }
    }
}

impl RateCard {
    pub fn rate(&self, class: FareClass) -> Decimal {
        match class {
            FareClass::Sleeper => self.sleeper,
            FareClass::Ac3Tier => self.ac_3_tier,
            FareClass::Ac2Tier => self.ac_2_tier,
            FareClass::FirstClass => self.first_class,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        use strum::IntoEnumIterator;

        for class in FareClass::iter() {
            let rate = self.rate(class);
            if rate <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveRate { class, rate });
            }
        }
        Ok(())
    }
}

/// A money amount in paise (1/100 rupee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fare(u64);

impl Fare {
    pub fn from_paise(paise: u64) -> Self {
        Fare(paise)
    }

    /// Rounds to the nearest paisa, halves going up.
    pub fn from_rupees(amount: Decimal) -> Self {
        let paise = amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            * Decimal::ONE_HUNDRED;
        Fare(paise.to_u64().unwrap_or_default())
    }

    pub fn paise(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone)]
pub struct FareEngine {
    table: DistanceTable,
    rates: RateCard,
}

impl FareEngine {
    pub fn new(table: DistanceTable, rates: RateCard) -> Self {
        FareEngine { table, rates }
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    pub fn lookup_distance(&self, source: &str, destination: &str) -> Option<u32> {
        self.table.lookup_distance(source, destination)
    }

    pub fn fare_for_distance(&self, km: u32, class: FareClass) -> Fare {
        Fare::from_rupees(Decimal::from(km) * self.rates.rate(class))
    }

    pub fn compute_fare(&self, source: &str, destination: &str, class: FareClass) -> Option<Fare> {
        let km = self.lookup_distance(source, destination)?;
        Some(self.fare_for_distance(km, class))
    }
}
