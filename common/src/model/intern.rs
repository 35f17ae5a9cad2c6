use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Delivery mode of a single internship stint.
///
/// Serialized as the lowercase strings `"online"` / `"offline"`, which is
/// the wire contract the admin dashboard and the stored rows both use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Online,
    Offline,
}

/// One internship stint inside an intern record: subject area, date range,
/// delivery mode and the project video links collected during the stint.
///
/// A record's stints are stored JSON-encoded inside a single spreadsheet
/// cell, so this struct must round-trip through serde losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternshipField {
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub mode: Mode,
    pub project_videos: Vec<String>,
}

impl InternshipField {
    /// Whole months covered by this stint:
    /// `(end.year - start.year) * 12 + (end.month - start.month)`, clamped
    /// at zero. Unparseable dates count as zero months.
    pub fn months(&self) -> u32 {
        let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date))
        else {
            return 0;
        };

        let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
        months.max(0) as u32
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Aggregated training months across a record's stints, split by mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub total: u32,
    pub online: u32,
    pub offline: u32,
}

/// Sums `InternshipField::months` over `fields`, bucketed by mode.
pub fn month_totals(fields: &[InternshipField]) -> MonthTotals {
    let mut totals = MonthTotals::default();
    for field in fields {
        let months = field.months();
        match field.mode {
            Mode::Online => totals.online += months,
            Mode::Offline => totals.offline += months,
        }
        totals.total += months;
    }
    totals
}

/// One persisted intern profile. Field names follow the dashboard's JSON
/// contract (camelCase); the completed-month counters are whatever the
/// caller supplied at creation time, not recomputed on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub father_name: String,
    pub mother_name: String,
    pub photo: String,
    pub linkedin_profile: String,
    pub internship_fields: Vec<InternshipField>,
    pub total_months_completed: u32,
    pub online_months_completed: u32,
    pub offline_months_completed: u32,
    pub certificate_issue_date: String,
    pub created_at: String,
}
