// File: src/model.rs
// Core data types: procedure records, calendar periods and groupable fields.
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;
use thiserror::Error;

/// A single logged procedure.
///
/// Only `date` carries a format constraint (it is a real calendar date by
/// construction). Every textual field is free text, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    pub date: NaiveDate,
    pub hospital: String,
    pub region: String,
    pub procedure: String,
    pub surgeon: String,
    pub staff: String,
    #[serde(default)]
    pub notes: String,
}

impl ProcedureRecord {
    /// Creates a record on `date` with every text field empty.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hospital: String::new(),
            region: String::new(),
            procedure: String::new(),
            surgeon: String::new(),
            staff: String::new(),
            notes: String::new(),
        }
    }

    pub fn period(&self) -> Period {
        Period::of(self.date)
    }
}

/// A calendar month, the aggregation granularity used everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The first calendar day of the month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// The month immediately after this one.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid period '{0}', expected YYYY-MM")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePeriodError(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(err)?;
        let year = y.parse::<i32>().map_err(|_| err())?;
        let month = m.parse::<u32>().map_err(|_| err())?;
        Period::new(year, month).ok_or_else(err)
    }
}

/// Record fields that can be grouped and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CategoryField {
    Region,
    Staff,
    Hospital,
}

impl CategoryField {
    pub fn value_of(self, record: &ProcedureRecord) -> &str {
        match self {
            CategoryField::Region => &record.region,
            CategoryField::Staff => &record.staff,
            CategoryField::Hospital => &record.hospital,
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryField::Region => write!(f, "Region"),
            CategoryField::Staff => write!(f, "Staff"),
            CategoryField::Hospital => write!(f, "Hospital"),
        }
    }
}
