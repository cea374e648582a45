use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::ConfigError;
use crate::schema::SEATS_PER_COACH;

/// Only `SeatAssigner::assign` hands these out, so the seat is always in
/// 1..=SEATS_PER_COACH and the coach is one of the assigner's coaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatAssignment {
    coach: String,
    seat: u8,
}

impl SeatAssignment {
    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn seat(&self) -> u8 {
        self.seat
    }

    pub(crate) fn into_parts(self) -> (String, u8) {
        (self.coach, self.seat)
    }

    #[cfg(test)]
    pub(crate) fn fixed(coach: &str, seat: u8) -> Self {
        assert!((1..=SEATS_PER_COACH).contains(&seat), "seat {seat}");
        SeatAssignment {
            coach: coach.to_string(),
            seat,
        }
    }
}

/// Picks a coach and seat at random. There is no inventory behind this:
/// two bookings may well get the same seat.
#[derive(Debug, Clone)]
pub struct SeatAssigner {
    coaches: Vec<String>,
}

impl SeatAssigner {
    pub fn new(coaches: Vec<String>) -> Result<Self, ConfigError> {
        if coaches.is_empty() {
            return Err(ConfigError::NoCoaches);
        }
        if let Some(blank) = coaches.iter().find(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidCoach(blank.clone()));
        }
        Ok(SeatAssigner { coaches })
    }

    pub fn coaches(&self) -> &[String] {
        &self.coaches
    }

    pub fn assign<R: Rng + ?Sized>(&self, rng: &mut R) -> SeatAssignment {
        let seat = rng.gen_range(1..=SEATS_PER_COACH);
        // never empty, see `new`
        let coach = self.coaches.choose(rng).cloned().unwrap_or_default();
        tracing::debug!(%coach, seat, "seat assigned");
        SeatAssignment { coach, seat }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::COACH_MAP;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn default_assigner() -> SeatAssigner {
        SeatAssigner::new(COACH_MAP.iter().map(|c| c.to_string()).collect()).unwrap()
    }

    #[test]
    fn assignments_stay_in_range() {
        let assigner = default_assigner();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let assignment = assigner.assign(&mut rng);
            let (coach, seat) = (assignment.coach(), assignment.seat());
            assert!((1..=72).contains(&seat), "seat {seat}");
            assert!(COACH_MAP.contains(&coach), "coach {coach}");
        }
    }

    #[test]
    fn every_coach_and_both_seat_bounds_show_up() {
        let assigner = default_assigner();
        let mut rng = StdRng::seed_from_u64(42);
        let mut coaches = HashSet::new();
        let mut seats = HashSet::new();
        for _ in 0..5_000 {
            let assignment = assigner.assign(&mut rng);
            seats.insert(assignment.seat());
            coaches.insert(assignment.into_parts().0);
        }
        assert_eq!(coaches.len(), COACH_MAP.len());
        assert_eq!(seats.len(), 72);
    }

    #[test]
    fn same_seed_same_assignment() {
        let assigner = default_assigner();
        let a = assigner.assign(&mut StdRng::seed_from_u64(2024));
        let b = assigner.assign(&mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_or_blank_coach_sets() {
        assert!(matches!(SeatAssigner::new(vec![]), Err(ConfigError::NoCoaches)));
        assert!(matches!(
            SeatAssigner::new(vec!["S1".to_string(), " ".to_string()]),
            Err(ConfigError::InvalidCoach(_))
        ));
    }
}
