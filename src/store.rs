// File: src/store.rs
// Append-only procedure log and the deduplicated staff roster.
use crate::model::ProcedureRecord;
use thiserror::Error;

pub const DEFAULT_STAFF: [&str; 14] = [
    "JOSEPHINE",
    "JACOB",
    "NYOKABI",
    "NAOMI",
    "CHARITY",
    "KEVIN",
    "MIRIAM",
    "KIGEN",
    "FAITH",
    "JAMES",
    "GEOFFREY",
    "SPENCER",
    "EVANS",
    "KENYORU",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaffError {
    #[error("Staff name is empty")]
    Empty,
    #[error("Staff member '{0}' already exists")]
    Duplicate(String),
}

/// Ordered set of unique, case-sensitive staff names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffRoster {
    names: Vec<String>,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_roster() -> Self {
        Self::from_names(DEFAULT_STAFF)
    }

    /// Builds a roster, silently skipping empty and repeated names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            let _ = roster.add(name.as_ref());
        }
        roster
    }

    /// Trims `name` and appends it. The roster is untouched on error.
    /// Returns the name as stored.
    pub fn add(&mut self, name: &str) -> Result<String, StaffError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(StaffError::Empty);
        }
        if self.contains(trimmed) {
            return Err(StaffError::Duplicate(trimmed.to_string()));
        }
        self.names.push(trimmed.to_string());
        Ok(trimmed.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// In-memory record log for one session. Records are never updated or removed
/// individually; the only bulk operation is `replace_all`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ProcedureRecord>,
    roster: StaffRoster,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_roster(StaffRoster::default_roster())
    }

    pub fn with_roster(roster: StaffRoster) -> Self {
        Self {
            records: Vec::new(),
            roster,
        }
    }

    pub fn append(&mut self, record: ProcedureRecord) {
        self.records.push(record);
    }

    pub fn replace_all(&mut self, records: Vec<ProcedureRecord>) {
        self.records = records;
    }

    pub fn add_staff(&mut self, name: &str) -> Result<String, StaffError> {
        self.roster.add(name)
    }

    pub fn list_staff(&self) -> &[String] {
        self.roster.names()
    }

    pub fn roster(&self) -> &StaffRoster {
        &self.roster
    }

    pub fn list_records(&self) -> &[ProcedureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
