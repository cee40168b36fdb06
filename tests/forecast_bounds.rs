// File: tests/forecast_bounds.rs
use orthotrack::forecast::{ForecastError, JITTER_MAX, JITTER_MIN, forecast};
use orthotrack::model::Period;
use orthotrack::report::MonthlySeries;

fn series(entries: &[(&str, usize)]) -> MonthlySeries {
    entries
        .iter()
        .map(|(p, c)| (p.parse::<Period>().unwrap(), *c))
        .collect()
}

#[test]
fn test_single_period_is_not_enough_history() {
    let mut rng = fastrand::Rng::with_seed(1);
    let s = series(&[("2024-01", 4)]);
    assert_eq!(
        forecast(&s, 3, &mut rng),
        Err(ForecastError::NotEnoughHistory { periods: 1 })
    );
}

#[test]
fn test_empty_series_is_not_enough_history() {
    let mut rng = fastrand::Rng::with_seed(1);
    assert_eq!(
        forecast(&MonthlySeries::new(), 3, &mut rng),
        Err(ForecastError::NotEnoughHistory { periods: 0 })
    );
}

#[test]
fn test_output_is_history_plus_horizon() {
    let mut rng = fastrand::Rng::with_seed(7);
    let s = series(&[("2024-01", 2), ("2024-02", 1)]);
    let points = forecast(&s, 3, &mut rng).unwrap();

    assert_eq!(points.len(), s.len() + 3);
    assert!(!points[0].projected && !points[1].projected);
    assert!(points[2..].iter().all(|p| p.projected));
    assert_eq!(points[0].value, 2);
    assert_eq!(points[1].value, 1);
}

#[test]
fn test_zero_horizon_returns_history_only() {
    let mut rng = fastrand::Rng::with_seed(7);
    let s = series(&[("2024-01", 2), ("2024-02", 1)]);
    let points = forecast(&s, 0, &mut rng).unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn test_projected_months_are_consecutive_despite_gaps() {
    let mut rng = fastrand::Rng::with_seed(3);
    // Gap between March and November; projection crosses the year boundary.
    let s = series(&[("2024-03", 5), ("2024-11", 8)]);
    let projected: Vec<String> = forecast(&s, 3, &mut rng)
        .unwrap()
        .into_iter()
        .filter(|p| p.projected)
        .map(|p| p.period.to_string())
        .collect();
    assert_eq!(projected, vec!["2024-12", "2025-01", "2025-02"]);
}

#[test]
fn test_each_projection_jitters_the_last_observed_value() {
    // A compounding walk over 200 steps would drift far outside the band.
    let s = series(&[("2024-01", 3), ("2024-02", 10)]);
    for seed in 0..50 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let points = forecast(&s, 200, &mut rng).unwrap();
        for p in points.iter().filter(|p| p.projected) {
            assert!(
                (10 + JITTER_MIN..=10 + JITTER_MAX).contains(&p.value),
                "seed {} produced {} outside [8, 15]",
                seed,
                p.value
            );
        }
    }
}

#[test]
fn test_jitter_covers_full_inclusive_range() {
    let s = series(&[("2024-01", 0), ("2024-02", 0)]);
    let mut rng = fastrand::Rng::with_seed(99);
    let values: std::collections::HashSet<i64> = forecast(&s, 2000, &mut rng)
        .unwrap()
        .into_iter()
        .filter(|p| p.projected)
        .map(|p| p.value)
        .collect();
    let expected: std::collections::HashSet<i64> = (JITTER_MIN..=JITTER_MAX).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_projection_may_go_negative() {
    let s = series(&[("2024-01", 4), ("2024-02", 1)]);
    let mut rng = fastrand::Rng::with_seed(5);
    let points = forecast(&s, 500, &mut rng).unwrap();
    assert!(points.iter().any(|p| p.value < 0));
    assert!(points.iter().all(|p| p.value >= 1 + JITTER_MIN));
}

#[test]
fn test_same_seed_same_forecast() {
    let s = series(&[("2024-01", 4), ("2024-02", 6)]);
    let a = forecast(&s, 3, &mut fastrand::Rng::with_seed(11)).unwrap();
    let b = forecast(&s, 3, &mut fastrand::Rng::with_seed(11)).unwrap();
    assert_eq!(a, b);
}
