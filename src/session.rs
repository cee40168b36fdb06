// File: src/session.rs
//! One user's working session: the record store, the roster and the random
//! source, passed explicitly to every view instead of living in globals.
//!
//! Read views that need data return [`ViewError::NoData`] on an empty store so
//! the presentation layer can show an informational message instead of an
//! empty chart. The raw `list_*` queries just return empty collections.
use crate::config::Config;
use crate::forecast::{self, ForecastError, ForecastPoint};
use crate::model::{CategoryField, ProcedureRecord};
use crate::report::{self, CategoryCount, CrossTabRow, DashboardSummary, MonthlySeries};
use crate::store::{RecordStore, StaffError, StaffRoster};
use crate::synthetic;
use chrono::{Local, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("No records yet. Add or generate data first.")]
    NoData,
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub monthly: MonthlySeries,
    pub regions: Vec<CategoryCount>,
    pub top_staff: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionReport {
    pub region: String,
    pub records: Vec<ProcedureRecord>,
    pub trend: MonthlySeries,
}

#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    rng: fastrand::Rng,
    pub forecast_horizon: usize,
    pub synthetic_count: usize,
    pub staff_top_n: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session with the default roster and an unseeded RNG.
    pub fn new() -> Self {
        Self::from_parts(RecordStore::new(), fastrand::Rng::new())
    }

    /// Like `new`, but every random draw is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(RecordStore::new(), fastrand::Rng::with_seed(seed))
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let store = RecordStore::with_roster(StaffRoster::from_names(&config.staff));
        let mut session = Self::from_parts(store, rng);
        session.forecast_horizon = config.forecast_horizon;
        session.synthetic_count = config.synthetic_count;
        session.staff_top_n = config.staff_top_n;

        if config.seed_on_start {
            session.generate_synthetic_data(config.synthetic_count);
        }
        session
    }

    fn from_parts(store: RecordStore, rng: fastrand::Rng) -> Self {
        Self {
            store,
            rng,
            forecast_horizon: forecast::DEFAULT_HORIZON,
            synthetic_count: synthetic::DEFAULT_COUNT,
            staff_top_n: 10,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // --- Mutations ---

    pub fn append_record(&mut self, record: ProcedureRecord) {
        log::info!(
            "Appending {} procedure at {} ({})",
            record.date,
            record.hospital,
            record.region
        );
        self.store.append(record);
    }

    pub fn add_staff_name(&mut self, name: &str) -> Result<String, StaffError> {
        match self.store.add_staff(name) {
            Ok(added) => {
                log::info!("Added staff member '{}'", added);
                Ok(added)
            }
            Err(e) => {
                log::warn!("Rejected staff name '{}': {}", name, e);
                Err(e)
            }
        }
    }

    pub fn generate_synthetic_data(&mut self, count: usize) {
        self.generate_synthetic_data_at(count, Local::now().date_naive());
    }

    /// Replaces every record with `count` generated ones dated relative to `today`.
    pub fn generate_synthetic_data_at(&mut self, count: usize, today: NaiveDate) {
        let records = synthetic::generate(count, self.store.list_staff(), today, &mut self.rng);
        log::info!("Replaced store with {} synthetic records", records.len());
        self.store.replace_all(records);
    }

    // --- Raw queries ---

    pub fn list_staff(&self) -> &[String] {
        self.store.list_staff()
    }

    pub fn list_records(&self) -> &[ProcedureRecord] {
        self.store.list_records()
    }

    pub fn list_monthly_counts(&self) -> MonthlySeries {
        report::count_by_month(self.store.list_records())
    }

    pub fn list_category_counts(&self, field: CategoryField, top_n: Option<usize>) -> Vec<CategoryCount> {
        let counts = report::count_by_category(self.store.list_records(), field);
        match top_n {
            Some(n) => report::top_n(counts, n),
            None => counts,
        }
    }

    pub fn list_cross_tab(&self) -> Vec<CrossTabRow> {
        report::monthly_by_region(self.store.list_records())
    }

    pub fn filter_by_region(&self, region: &str) -> Vec<ProcedureRecord> {
        report::filter_by_region(self.store.list_records(), region)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Monthly counts for one region. Months without procedures there are absent.
    pub fn region_trend(&self, region: &str) -> MonthlySeries {
        report::count_by_month(&self.filter_by_region(region))
    }

    pub fn regions(&self) -> Vec<String> {
        report::distinct_values(self.store.list_records(), CategoryField::Region)
    }

    // --- Views ---

    fn require_data(&self) -> Result<(), ViewError> {
        if self.store.is_empty() {
            Err(ViewError::NoData)
        } else {
            Ok(())
        }
    }

    pub fn dashboard(&self) -> Result<Dashboard, ViewError> {
        self.require_data()?;
        let records = self.store.list_records();
        Ok(Dashboard {
            summary: report::dashboard_summary(records),
            monthly: report::count_by_month(records),
            regions: report::count_by_category(records, CategoryField::Region),
            top_staff: self.list_category_counts(CategoryField::Staff, Some(self.staff_top_n)),
        })
    }

    pub fn monthly_report(&self) -> Result<Vec<CrossTabRow>, ViewError> {
        self.require_data()?;
        Ok(self.list_cross_tab())
    }

    pub fn region_report(&self, region: &str) -> Result<RegionReport, ViewError> {
        self.require_data()?;
        let records = self.filter_by_region(region);
        let trend = self.region_trend(region);
        Ok(RegionReport {
            region: region.to_string(),
            records,
            trend,
        })
    }

    /// Takes `&mut self` because the forecast consumes randomness from the
    /// session's generator.
    pub fn forecast_next(&mut self, horizon: usize) -> Result<Vec<ForecastPoint>, ViewError> {
        self.require_data()?;
        let series = self.list_monthly_counts();
        let points = forecast::forecast(&series, horizon, &mut self.rng)?;
        Ok(points)
    }
}
