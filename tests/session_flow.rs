// File: tests/session_flow.rs
use chrono::NaiveDate;
use orthotrack::config::Config;
use orthotrack::forecast::ForecastError;
use orthotrack::model::{CategoryField, ProcedureRecord};
use orthotrack::session::{Session, ViewError};
use orthotrack::store::StaffError;

fn record(date: &str, region: &str, staff: &str) -> ProcedureRecord {
    let mut r = ProcedureRecord::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap());
    r.region = region.to_string();
    r.staff = staff.to_string();
    r.hospital = format!("{} Hosp", region);
    r
}

#[test]
fn test_empty_session_views_report_no_data() {
    let mut session = Session::with_seed(1);
    assert_eq!(session.dashboard(), Err(ViewError::NoData));
    assert_eq!(session.monthly_report(), Err(ViewError::NoData));
    assert_eq!(session.region_report("Meru"), Err(ViewError::NoData));
    assert_eq!(session.forecast_next(3), Err(ViewError::NoData));

    // Raw queries are simply empty
    assert!(session.list_monthly_counts().is_empty());
    assert!(session.list_cross_tab().is_empty());
    assert!(session.filter_by_region("Meru").is_empty());
}

#[test]
fn test_dashboard_after_appending_records() {
    let mut session = Session::with_seed(1);
    session.append_record(record("2024-01-15", "Eldoret", "FAITH"));
    session.append_record(record("2024-01-20", "Eldoret", "JAMES"));
    session.append_record(record("2024-02-01", "Meru", "FAITH"));

    let dashboard = session.dashboard().unwrap();
    assert_eq!(dashboard.summary.procedures, 3);
    assert_eq!(dashboard.summary.hospitals, 2);
    assert_eq!(dashboard.summary.regions, 2);
    assert_eq!(dashboard.summary.staff, 2);
    assert_eq!(dashboard.monthly.len(), 2);
    assert_eq!(dashboard.regions[0], ("Eldoret".to_string(), 2));
    assert_eq!(dashboard.top_staff[0], ("FAITH".to_string(), 2));
}

#[test]
fn test_staff_top_n_is_applied() {
    let mut session = Session::with_seed(1);
    session.staff_top_n = 1;
    session.append_record(record("2024-01-15", "Eldoret", "FAITH"));
    session.append_record(record("2024-01-20", "Eldoret", "JAMES"));

    assert_eq!(session.dashboard().unwrap().top_staff.len(), 1);
    assert_eq!(
        session.list_category_counts(CategoryField::Staff, None).len(),
        2
    );
}

#[test]
fn test_region_report_contains_only_that_region() {
    let mut session = Session::with_seed(1);
    session.append_record(record("2024-01-15", "Eldoret", "FAITH"));
    session.append_record(record("2024-03-20", "Meru", "JAMES"));
    session.append_record(record("2024-05-01", "Meru", "FAITH"));

    let report = session.region_report("Meru").unwrap();
    assert_eq!(report.records.len(), 2);
    assert!(report.records.iter().all(|r| r.region == "Meru"));
    assert_eq!(report.trend.len(), 2);
    assert_eq!(session.regions(), vec!["Eldoret".to_string(), "Meru".to_string()]);
}

#[test]
fn test_forecast_needs_two_periods() {
    let mut session = Session::with_seed(1);
    session.append_record(record("2024-01-15", "Eldoret", "FAITH"));
    session.append_record(record("2024-01-16", "Eldoret", "FAITH"));
    assert_eq!(
        session.forecast_next(3),
        Err(ViewError::Forecast(ForecastError::NotEnoughHistory { periods: 1 }))
    );

    session.append_record(record("2024-02-01", "Meru", "JAMES"));
    let points = session.forecast_next(3).unwrap();
    assert_eq!(points.len(), 5);
}

#[test]
fn test_add_staff_name_errors_leave_roster_unchanged() {
    let mut session = Session::with_seed(1);
    let before = session.list_staff().len();
    assert_eq!(session.add_staff_name("  "), Err(StaffError::Empty));
    assert!(matches!(
        session.add_staff_name("JACOB"),
        Err(StaffError::Duplicate(_))
    ));
    assert_eq!(session.list_staff().len(), before);

    assert_eq!(session.add_staff_name(" OTIENO "), Ok("OTIENO".to_string()));
    assert_eq!(session.list_staff().len(), before + 1);
}

#[test]
fn test_from_config_applies_settings() {
    let cfg = Config {
        forecast_horizon: 6,
        synthetic_count: 12,
        staff_top_n: 3,
        seed_on_start: true,
        rng_seed: Some(77),
        staff: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        ..Config::default()
    };
    let session = Session::from_config(&cfg);

    assert_eq!(session.forecast_horizon, 6);
    assert_eq!(session.staff_top_n, 3);
    assert_eq!(session.list_staff(), &["A", "B"]);
    assert_eq!(session.list_records().len(), 12);
    assert!(
        session
            .list_records()
            .iter()
            .all(|r| r.staff == "A" || r.staff == "B")
    );
}

#[test]
fn test_from_config_default_starts_empty() {
    let session = Session::from_config(&Config::default());
    assert!(session.is_empty());
    assert_eq!(session.forecast_horizon, 3);
    assert_eq!(session.synthetic_count, 50);
}

#[test]
fn test_sessions_are_isolated() {
    let mut a = Session::with_seed(1);
    let b = Session::with_seed(1);
    a.append_record(record("2024-01-15", "Eldoret", "FAITH"));
    a.add_staff_name("ONLY_IN_A").unwrap();

    assert!(b.is_empty());
    assert!(!b.list_staff().contains(&"ONLY_IN_A".to_string()));
}

#[test]
fn test_region_trend_skips_months_without_procedures() {
    let mut session = Session::with_seed(1);
    session.append_record(record("2024-01-15", "Meru", "FAITH"));
    session.append_record(record("2024-01-28", "Meru", "JAMES"));
    session.append_record(record("2024-02-03", "Eldoret", "FAITH"));
    session.append_record(record("2024-03-09", "Meru", "FAITH"));

    let trend = session.region_trend("Meru");
    let entries: Vec<(String, usize)> = trend.iter().map(|(p, c)| (p.to_string(), *c)).collect();
    assert_eq!(
        entries,
        vec![("2024-01".to_string(), 2), ("2024-03".to_string(), 1)]
    );

    let report = session.region_report("Meru").unwrap();
    assert_eq!(report.trend, trend);
    assert_eq!(report.records.len(), 3);

    assert!(session.region_trend("Nakuru").is_empty());
}
