//! Property tests for week generation.

use booking_wizard_core::schedule::{monday_of, DAYS_PER_WEEK};
use booking_wizard_core::{
    AlwaysAvailable, ScheduleConfig, ScheduleGenerator, SimulatedAvailability,
};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2080
    (0i64..30_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn week_is_five_consecutive_days_from_monday(reference in any_date(), seed in any::<u64>()) {
        let config = ScheduleConfig::default();
        let policy = SimulatedAvailability::seeded(&config, seed);
        let mut generator = ScheduleGenerator::new(config, Box::new(policy));

        let week = generator.week(reference);
        prop_assert_eq!(week.len(), DAYS_PER_WEEK);
        prop_assert_eq!(week[0].date.weekday(), Weekday::Mon);
        prop_assert_eq!(week[0].date, monday_of(reference));
        for pair in week.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        prop_assert!(week[0].date <= reference);
        prop_assert!(reference - week[0].date < Duration::days(7));
    }

    #[test]
    fn slots_follow_cadence_and_lunch_is_closed(reference in any_date(), seed in any::<u64>()) {
        let config = ScheduleConfig::default();
        let policy = SimulatedAvailability::seeded(&config, seed);
        let mut generator = ScheduleGenerator::new(config, Box::new(policy));

        let opening = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let lunch_start = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let lunch_end = NaiveTime::from_hms_opt(14, 0, 0).unwrap();

        for day in generator.week(reference) {
            prop_assert_eq!(day.slots.len(), 21);
            prop_assert_eq!(day.day_number, day.date.day());

            let mut previous: Option<NaiveTime> = None;
            for slot in &day.slots {
                let start = slot.start_time().unwrap();
                prop_assert!(start >= opening && start <= closing);
                prop_assert!(start.minute() % 30 == 0);
                if let Some(previous) = previous {
                    prop_assert_eq!(start - previous, Duration::minutes(30));
                }
                previous = Some(start);

                if start >= lunch_start && start < lunch_end {
                    prop_assert!(!slot.available, "{} {} open at lunch", day.date, slot.time);
                }
            }
        }
    }
}

#[test]
fn test_always_available_outside_lunch() {
    let config = ScheduleConfig::default();
    let policy = AlwaysAvailable::new(&config);
    let mut generator = ScheduleGenerator::new(config, Box::new(policy));

    let day = generator.day(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap());
    assert_eq!(day.day_name, "Jeudi");
    assert_eq!(day.month, "Oct.");
    assert_eq!(day.available_count(), 17);
    assert!(day.is_slot_available("08:00"));
    assert!(day.is_slot_available("18:00"));
    assert!(!day.is_slot_available("12:00"));
    assert!(!day.is_slot_available("13:30"));
    assert!(day.is_slot_available("14:00"));
}

#[test]
fn test_sunday_belongs_to_previous_week() {
    let sunday = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
    assert_eq!(monday_of(sunday), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
}

#[test]
fn test_same_seed_same_week() {
    let config = ScheduleConfig::default();
    let reference = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();

    let mut a = ScheduleGenerator::new(
        config.clone(),
        Box::new(SimulatedAvailability::seeded(&config, 7)),
    );
    let mut b = ScheduleGenerator::new(
        config.clone(),
        Box::new(SimulatedAvailability::seeded(&config, 7)),
    );
    assert_eq!(a.week(reference), b.week(reference));
}
