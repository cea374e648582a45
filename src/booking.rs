use serde::{Deserialize, Serialize};

use crate::fare::{Fare, FareEngine};
use crate::schema::FareClass;
use crate::seat::SeatAssignment;

/// Raw form input. Nothing here has been checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub age: String,
    pub source: String,
    pub destination: String,
    pub train: String,
    pub date: String,
    pub fare_class: Option<FareClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingRejection {
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("source and destination are both {0}")]
    SameStationRoute(String),

    #[error("no route data between {from} and {to}")]
    RouteNotFound { from: String, to: String },
}

impl BookingRejection {
    pub fn title(&self) -> &'static str {
        match self {
            BookingRejection::MissingFields(_) => "Missing Info",
            BookingRejection::SameStationRoute(_) => "Invalid Route",
            BookingRejection::RouteNotFound { .. } => "Route Not Found",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BookingRejection::MissingFields(_) => "Please fill all fields!",
            BookingRejection::SameStationRoute(_) => {
                "Source and destination cannot be the same!"
            }
            BookingRejection::RouteNotFound { .. } => "No route data found for this journey.",
        }
    }
}

impl BookingRequest {
    /// Names of the empty fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = [
            ("name", &self.name),
            ("age", &self.age),
            ("source", &self.source),
            ("destination", &self.destination),
            ("train", &self.train),
            ("date", &self.date),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if self.fare_class.is_none() {
            missing.push("class");
        }
        missing
    }

    /// Checks completeness, then the route, then route existence. The first
    /// failing check decides the rejection.
    pub fn validate(self, engine: &FareEngine) -> Result<ValidatedBooking, BookingRejection> {
        let missing = self.missing_fields();
        let Some(fare_class) = self.fare_class.filter(|_| missing.is_empty()) else {
            tracing::debug!(?missing, "booking rejected");
            return Err(BookingRejection::MissingFields(missing));
        };

        if self.source == self.destination {
            tracing::debug!(station = %self.source, "booking rejected: same station");
            return Err(BookingRejection::SameStationRoute(self.source));
        }

        let Some(distance_km) = engine.lookup_distance(&self.source, &self.destination) else {
            tracing::debug!(from = %self.source, to = %self.destination, "booking rejected: no route");
            return Err(BookingRejection::RouteNotFound {
                from: self.source,
                to: self.destination,
            });
        };

        let fare = engine.fare_for_distance(distance_km, fare_class);
        tracing::info!(
            from = %self.source,
            to = %self.destination,
            class = %fare_class,
            distance_km,
            %fare,
            "booking validated"
        );
        Ok(ValidatedBooking {
            request: self,
            fare_class,
            distance_km,
            fare,
        })
    }
}

/// A request that passed every check, priced but without a seat yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    request: BookingRequest,
    fare_class: FareClass,
    distance_km: u32,
    fare: Fare,
}

impl ValidatedBooking {
    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn fare_class(&self) -> FareClass {
        self.fare_class
    }

    pub fn distance_km(&self) -> u32 {
        self.distance_km
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn into_record(self, seat: SeatAssignment) -> BookingRecord {
        let BookingRequest {
            name,
            age,
            source,
            destination,
            train,
            date,
            ..
        } = self.request;
        let (coach, seat) = seat.into_parts();
        BookingRecord {
            name,
            age,
            source,
            destination,
            train,
            date,
            fare_class: self.fare_class,
            fare: self.fare,
            coach,
            seat,
        }
    }
}

/// A priced, seated booking, ready to be printed as a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    name: String,
    age: String,
    source: String,
    destination: String,
    train: String,
    date: String,
    fare_class: FareClass,
    fare: Fare,
    coach: String,
    seat: u8,
}

impl BookingRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn train(&self) -> &str {
        &self.train
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn fare_class(&self) -> FareClass {
        self.fare_class
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn seat(&self) -> u8 {
        self.seat
    }
}
