// File: src/report.rs
//! Group-by-count views over a snapshot of procedure records.
//!
//! Every function here is a pure read: it takes the records it aggregates and
//! never caches. An empty input always yields an empty result, never an error;
//! callers decide how to present "no data yet".
use crate::model::{CategoryField, Period, ProcedureRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Count of records per calendar month, ascending by period.
/// Sparse: months without records are absent.
pub type MonthlySeries = BTreeMap<Period, usize>;

/// A category value and the number of records carrying it.
pub type CategoryCount = (String, usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTabRow {
    pub period: Period,
    pub region: String,
    pub count: usize,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub procedures: usize,
    pub hospitals: usize,
    pub regions: usize,
    pub staff: usize,
}

pub fn count_by_month(records: &[ProcedureRecord]) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    for record in records {
        *series.entry(record.period()).or_insert(0) += 1;
    }
    series
}

/// Counts records per distinct value of `field`.
///
/// Sorted descending by count; equal counts keep the order in which the value
/// was first seen.
pub fn count_by_category(records: &[ProcedureRecord], field: CategoryField) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let value = field.value_of(record);
        match positions.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn top_n(mut counts: Vec<CategoryCount>, n: usize) -> Vec<CategoryCount> {
    counts.truncate(n);
    counts
}

pub fn filter_by_region<'a>(records: &'a [ProcedureRecord], region: &str) -> Vec<&'a ProcedureRecord> {
    records.iter().filter(|r| r.region == region).collect()
}

/// Two-key (month, region) count. Only observed pairs appear; rows are
/// ordered by period, then region.
pub fn monthly_by_region(records: &[ProcedureRecord]) -> Vec<CrossTabRow> {
    let mut grouped: BTreeMap<(Period, &str), usize> = BTreeMap::new();
    for record in records {
        *grouped
            .entry((record.period(), record.region.as_str()))
            .or_insert(0) += 1;
    }

    grouped
        .into_iter()
        .map(|((period, region), count)| CrossTabRow {
            period,
            region: region.to_string(),
            count,
        })
        .collect()
}

/// Distinct values of `field`, in first-seen order.
pub fn distinct_values(records: &[ProcedureRecord], field: CategoryField) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        let value = field.value_of(record);
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

pub fn dashboard_summary(records: &[ProcedureRecord]) -> DashboardSummary {
    let distinct = |field| distinct_values(records, field).len();
    DashboardSummary {
        procedures: records.len(),
        hospitals: distinct(CategoryField::Hospital),
        regions: distinct(CategoryField::Region),
        staff: distinct(CategoryField::Staff),
    }
}
