//! Schedule list filtering and sorting tests for billing-engine.

mod common;

use billing_engine::models::{BillingSchedule, Frequency, ListSchedulesFilter};
use billing_engine::services::{filter_schedules, recurring_revenue};
use common::seed_schedules;
use domain_core::query::{sort_by_key_str, TextMatch};
use domain_core::MoneyRounding;
use rust_decimal::Decimal;

fn services(schedules: &[&BillingSchedule]) -> Vec<String> {
    schedules.iter().map(|s| s.service_name.clone()).collect()
}

#[test]
fn empty_filter_keeps_all_schedules() {
    let schedules = seed_schedules();
    let hits = filter_schedules(&schedules, &ListSchedulesFilter::default(), TextMatch::default());
    assert_eq!(hits.len(), schedules.len());
}

#[test]
fn search_covers_client_field_and_service() {
    let schedules = seed_schedules();
    let criteria = ListSchedulesFilter {
        search: Some("soil".to_string()),
        ..Default::default()
    };
    let hits = filter_schedules(&schedules, &criteria, TextMatch::default());
    assert_eq!(services(&hits), vec!["Quarterly Soil Analysis"]);

    let by_client = ListSchedulesFilter {
        search: Some("hodzic".to_string()),
        ..Default::default()
    };
    assert!(filter_schedules(&schedules, &by_client, TextMatch::CaseInsensitive).is_empty());
    assert_eq!(
        filter_schedules(&schedules, &by_client, TextMatch::FoldDiacritics).len(),
        2
    );
}

#[test]
fn frequency_and_status_filters_combine() {
    let schedules = seed_schedules();
    let criteria = ListSchedulesFilter {
        search: None,
        frequency: Some(Frequency::BiWeekly),
        active: Some(true),
    };
    assert!(filter_schedules(&schedules, &criteria, TextMatch::default()).is_empty());

    let inactive = ListSchedulesFilter {
        active: Some(false),
        ..Default::default()
    };
    let hits = filter_schedules(&schedules, &inactive, TextMatch::default());
    assert_eq!(services(&hits), vec!["Bi-weekly Pest Control"]);
}

#[test]
fn schedules_sort_by_amount_desc() {
    let schedules = seed_schedules();
    let sorted = sort_by_key_str(&schedules, "amount-desc").unwrap();
    let amounts: Vec<Decimal> = sorted.iter().map(|s| s.amount).collect();
    let expected: Vec<Decimal> = [3000, 1200, 800, 650, 500].into_iter().map(Decimal::from).collect();
    assert_eq!(amounts, expected);
}

#[test]
fn seed_recurring_revenue() {
    let summary = recurring_revenue(&seed_schedules(), &MoneyRounding::default());
    assert_eq!(summary.total_schedules, 5);
    assert_eq!(summary.active_schedules, 4);
    assert_eq!(summary.monthly_revenue, Decimal::from(1200));
    // weekly 500 * 52 / 12 = 2166.67, monthly 1200, quarterly 3000 / 3 = 1000.
    assert_eq!(summary.monthly_run_rate, "4366.67".parse::<Decimal>().unwrap());
}
