//! Slot availability policies.
//!
//! There is no appointments store behind the wizard: availability is
//! simulated and re-rolled on every generation. A store-backed policy can
//! replace [`SimulatedAvailability`] by implementing [`AvailabilityPolicy`].

use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ScheduleConfig;

/// Decides whether a slot can be offered.
pub trait AvailabilityPolicy: Send {
    fn is_available(&mut self, date: NaiveDate, start: NaiveTime) -> bool;
}

/// Lunch is always closed; other slots are free with a fixed probability.
pub struct SimulatedAvailability<R: Rng + Send = StdRng> {
    lunch_start: NaiveTime,
    lunch_end: NaiveTime,
    rate: f64,
    rng: R,
}

impl SimulatedAvailability<StdRng> {
    /// Policy seeded from OS entropy.
    pub fn from_entropy(config: &ScheduleConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible policy for tests and demos.
    pub fn seeded(config: &ScheduleConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> SimulatedAvailability<R> {
    pub fn with_rng(config: &ScheduleConfig, rng: R) -> Self {
        Self {
            lunch_start: config.lunch_start,
            lunch_end: config.lunch_end,
            rate: sanitize_rate(config.availability_rate),
            rng,
        }
    }

    fn is_lunch(&self, start: NaiveTime) -> bool {
        start >= self.lunch_start && start < self.lunch_end
    }
}

impl<R: Rng + Send> AvailabilityPolicy for SimulatedAvailability<R> {
    fn is_available(&mut self, _date: NaiveDate, start: NaiveTime) -> bool {
        if self.is_lunch(start) {
            return false;
        }
        self.rng.gen_bool(self.rate)
    }
}

/// NaN counts as "never free".
fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

/// Every slot outside lunch is free.
pub struct AlwaysAvailable {
    lunch_start: NaiveTime,
    lunch_end: NaiveTime,
}

impl AlwaysAvailable {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            lunch_start: config.lunch_start,
            lunch_end: config.lunch_end,
        }
    }
}

impl AvailabilityPolicy for AlwaysAvailable {
    fn is_available(&mut self, _date: NaiveDate, start: NaiveTime) -> bool {
        !(start >= self.lunch_start && start < self.lunch_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_lunch_never_available() {
        let config = ScheduleConfig {
            availability_rate: 1.0,
            ..ScheduleConfig::default()
        };
        let mut policy = SimulatedAvailability::seeded(&config, 7);

        assert!(!policy.is_available(monday(), at(12, 0)));
        assert!(!policy.is_available(monday(), at(13, 30)));
        assert!(policy.is_available(monday(), at(11, 30)));
        assert!(policy.is_available(monday(), at(14, 0)));
    }

    #[test]
    fn test_zero_rate_closes_everything() {
        let config = ScheduleConfig {
            availability_rate: 0.0,
            ..ScheduleConfig::default()
        };
        let mut policy = SimulatedAvailability::seeded(&config, 7);
        assert!(!policy.is_available(monday(), at(9, 0)));
        assert!(!policy.is_available(monday(), at(17, 30)));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let config = ScheduleConfig::default();
        let mut a = SimulatedAvailability::seeded(&config, 42);
        let mut b = SimulatedAvailability::seeded(&config, 42);

        let draws_a: Vec<bool> = (8..18).map(|h| a.is_available(monday(), at(h, 0))).collect();
        let draws_b: Vec<bool> = (8..18).map(|h| b.is_available(monday(), at(h, 0))).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_always_available_respects_lunch() {
        let mut policy = AlwaysAvailable::new(&ScheduleConfig::default());
        assert!(policy.is_available(monday(), at(8, 0)));
        assert!(!policy.is_available(monday(), at(12, 30)));
    }

    #[test]
    fn test_nan_rate_never_available() {
        let config = ScheduleConfig {
            availability_rate: f64::NAN,
            ..ScheduleConfig::default()
        };
        let mut policy = SimulatedAvailability::seeded(&config, 7);
        assert!((8..18).all(|h| !policy.is_available(monday(), at(h, 0))));
    }
}
