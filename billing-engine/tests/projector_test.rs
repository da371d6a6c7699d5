//! Billing cycle projection tests for billing-engine.

mod common;

use billing_engine::models::Frequency;
use billing_engine::services::{
    advance, days_until, next_occurrence, occurrences_within, occurs_within, upcoming_billings,
    Advance,
};
use common::{schedule, seed_schedules, utc};
use domain_core::Calendar;
use proptest::prelude::*;
use rust_decimal::Decimal;

#[test]
fn monthly_from_january_31_clamps_to_february_28() {
    let s = schedule(
        "Monthly Fertilization",
        "Farmer Amira Hodžić",
        Frequency::Monthly,
        1200,
        "2025-01-31T00:00:00Z",
        true,
    );
    let next = advance(&s, s.next_billing_date, &Calendar::utc()).unwrap();
    assert_eq!(next, Advance::Next(utc("2025-02-28T00:00:00Z")));
    assert!(!next.is_terminal());
}

#[test]
fn monthly_clamps_to_february_29_in_leap_year() {
    let next = next_occurrence(Frequency::Monthly, utc("2024-01-31T00:00:00Z"), &Calendar::utc());
    assert_eq!(next.unwrap(), Advance::Next(utc("2024-02-29T00:00:00Z")));
}

#[test]
fn yearly_from_leap_day_clamps_to_february_28() {
    let next = next_occurrence(Frequency::Yearly, utc("2024-02-29T10:00:00Z"), &Calendar::utc());
    assert_eq!(next.unwrap(), Advance::Next(utc("2025-02-28T10:00:00Z")));
}

#[test]
fn monthly_keeps_local_wall_clock_across_dst() {
    let cal = Calendar::from_name("Europe/Sarajevo").unwrap();
    // 09:00 CET on 15 March is 08:00 UTC; 09:00 CEST on 15 April is 07:00 UTC.
    let next = next_occurrence(Frequency::Monthly, utc("2025-03-15T08:00:00Z"), &cal).unwrap();
    assert_eq!(next, Advance::Next(utc("2025-04-15T07:00:00Z")));
}

#[test]
fn inactive_schedule_never_occurs() {
    let cal = Calendar::utc();
    let now = utc("2025-05-01T09:00:00Z");
    let s = schedule(
        "Bi-weekly Pest Control",
        "Farmer Amira Hodžić",
        Frequency::BiWeekly,
        650,
        "2025-05-02T09:00:00Z",
        false,
    );
    let window = cal.next_days_from_now(7, now).unwrap();
    assert!(!occurs_within(&s, &window));
    assert!(occurrences_within(&s, &window, 10, &cal).unwrap().is_empty());
}

#[test]
fn window_bounds_are_inclusive_for_schedules() {
    let cal = Calendar::utc();
    let now = utc("2025-05-01T00:00:00Z");
    let window = cal.next_days_from_now(7, now).unwrap();
    let on_end = schedule("Edge", "Client", Frequency::Weekly, 10, "2025-05-08T00:00:00Z", true);
    let after = schedule("Edge", "Client", Frequency::Weekly, 10, "2025-05-08T00:00:00.001Z", true);
    assert!(occurs_within(&on_end, &window));
    assert!(!occurs_within(&after, &window));
}

#[test]
fn upcoming_billings_sorts_and_totals() {
    let schedules = seed_schedules();
    let cal = Calendar::utc();
    let now = utc("2025-04-30T12:00:00Z");
    let window = cal.next_days_from_now(30, now).unwrap();

    let upcoming = upcoming_billings(&schedules, &window);
    let services: Vec<_> = upcoming
        .schedules
        .iter()
        .map(|s| s.service_name.as_str())
        .collect();

    // The inactive pest-control schedule and the June soil analysis are excluded.
    assert_eq!(
        services,
        vec!["Weekly Disease Monitoring", "Harvest Assessment", "Monthly Fertilization"]
    );
    assert_eq!(upcoming.count, 3);
    assert_eq!(upcoming.total_amount, Decimal::from(2500));
}

#[test]
fn upcoming_billings_on_empty_input() {
    let cal = Calendar::utc();
    let now = utc("2025-04-30T12:00:00Z");
    let upcoming = upcoming_billings(&[], &cal.next_days_from_now(30, now).unwrap());
    assert_eq!(upcoming.count, 0);
    assert_eq!(upcoming.total_amount, Decimal::ZERO);
}

#[test]
fn occurrences_skip_dates_before_the_window() {
    let cal = Calendar::utc();
    let s = schedule("Weekly", "Client", Frequency::Weekly, 10, "2025-05-01T00:00:00Z", true);
    let window = cal.month_window(utc("2025-06-15T00:00:00Z")).unwrap();
    let dates = occurrences_within(&s, &window, 10, &cal).unwrap();
    assert_eq!(dates.first(), Some(&utc("2025-06-05T00:00:00Z")));
    assert_eq!(dates.len(), 4);
}

#[test]
fn one_time_schedule_occurs_once() {
    let cal = Calendar::utc();
    let s = schedule("Harvest", "Client", Frequency::OneTime, 800, "2025-05-03T00:00:00Z", true);
    let window = cal.month_window(utc("2025-05-03T00:00:00Z")).unwrap();
    assert_eq!(
        occurrences_within(&s, &window, 10, &cal).unwrap(),
        vec![utc("2025-05-03T00:00:00Z")]
    );
}

#[test]
fn days_until_matches_dashboard_badges() {
    let now = utc("2025-05-01T10:00:00Z");
    assert_eq!(days_until(utc("2025-05-01T10:00:00Z"), now), 0);
    assert_eq!(days_until(utc("2025-05-02T09:00:00Z"), now), 1);
    assert_eq!(days_until(utc("2025-05-08T10:00:00Z"), now), 7);
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Weekly),
        Just(Frequency::BiWeekly),
        Just(Frequency::Monthly),
        Just(Frequency::Quarterly),
        Just(Frequency::Yearly),
    ]
}

proptest! {
    #[test]
    fn recurring_advance_moves_forward(
        frequency in frequency_strategy(),
        secs in 946_684_800i64..2_208_988_800i64,
    ) {
        let fired = chrono::DateTime::from_timestamp(secs, 0).unwrap();
        let cal = Calendar::from_name("Europe/Sarajevo").unwrap();
        match next_occurrence(frequency, fired, &cal).unwrap() {
            Advance::Next(next) => {
                prop_assert!(next > fired);
                prop_assert!(next - fired >= chrono::Duration::days(6));
            }
            Advance::Terminal => prop_assert!(false, "recurring frequency reported terminal"),
        }
    }

    #[test]
    fn occurrences_are_increasing_and_inside_window(
        frequency in frequency_strategy(),
        offset_days in 0i64..120,
        limit in 0usize..20,
    ) {
        let cal = Calendar::utc();
        let now = utc("2025-01-01T00:00:00Z");
        let start = now + chrono::Duration::days(offset_days);
        let s = schedule("Any", "Client", frequency, 100, &start.to_rfc3339(), true);
        let window = cal.next_days_from_now(365, now).unwrap();
        let dates = occurrences_within(&s, &window, limit, &cal).unwrap();

        prop_assert!(dates.len() <= limit);
        for date in &dates {
            prop_assert!(window.contains(*date));
        }
        for pair in dates.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
