// Defines pages and the actions key handling can request.
use crate::model::ProcedureRecord;
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Page {
    Dashboard,
    AddProcedure,
    MonthlyReport,
    RegionReport,
    Forecast,
    ManageStaff,
    GenerateTestData,
}

impl Page {
    pub fn all() -> Vec<Page> {
        Page::iter().collect()
    }

    pub fn index(self) -> usize {
        Page::iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Page> {
        Page::iter().nth(idx)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Dashboard => write!(f, "Dashboard"),
            Page::AddProcedure => write!(f, "Add Procedure"),
            Page::MonthlyReport => write!(f, "Monthly Report"),
            Page::RegionReport => write!(f, "Region Report"),
            Page::Forecast => write!(f, "Forecast"),
            Page::ManageStaff => write!(f, "Manage Staff"),
            Page::GenerateTestData => write!(f, "Generate Test Data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AppendRecord(ProcedureRecord),
    AddStaff(String),
    GenerateTestData,
    RefreshForecast,
    Quit,
}
