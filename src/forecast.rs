// File: src/forecast.rs
//! Naive extrapolation of a monthly series.
//!
//! Each projected month is the last observed count plus an independent jitter
//! drawn from `JITTER_MIN..=JITTER_MAX`. Points do not compound on each other
//! and are not floored at zero; both behaviours are pending product review.
use crate::model::Period;
use crate::report::MonthlySeries;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_HORIZON: usize = 3;
pub const JITTER_MIN: i64 = -2;
pub const JITTER_MAX: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("Not enough history to forecast ({periods} period(s), need at least 2)")]
    NotEnoughHistory { periods: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    pub period: Period,
    pub value: i64,
    pub projected: bool,
}

/// Returns the historical series followed by `horizon` projected months.
///
/// Projected months start right after the last historical period and are
/// strictly consecutive, whatever gaps the history has.
pub fn forecast(
    series: &MonthlySeries,
    horizon: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<ForecastPoint>, ForecastError> {
    let (&last_period, &last_count) = match series.last_key_value() {
        Some(last) if series.len() >= 2 => last,
        _ => {
            return Err(ForecastError::NotEnoughHistory {
                periods: series.len(),
            });
        }
    };

    let mut points: Vec<ForecastPoint> = series
        .iter()
        .map(|(&period, &count)| ForecastPoint {
            period,
            value: count as i64,
            projected: false,
        })
        .collect();
    points.reserve(horizon);

    let base = last_count as i64;
    let mut period = last_period;
    for _ in 0..horizon {
        period = period.next();
        points.push(ForecastPoint {
            period,
            value: base + rng.i64(JITTER_MIN..=JITTER_MAX),
            projected: true,
        });
    }

    log::debug!(
        "Forecast {} month(s) past {} from base {}",
        horizon,
        last_period,
        base
    );
    Ok(points)
}
