use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time-bucketing strategy for report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    All,
    Quarterly,
    Monthly,
    Yearly,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Quarterly => "quarterly",
            FilterMode::Monthly => "monthly",
            FilterMode::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<FilterMode> {
        match value {
            "all" => Some(FilterMode::All),
            "quarterly" => Some(FilterMode::Quarterly),
            "monthly" => Some(FilterMode::Monthly),
            "yearly" => Some(FilterMode::Yearly),
            _ => None,
        }
    }
}

/// Calendar quarter (1-4) a month belongs to.
pub fn quarter_of_month(month: u32) -> u32 {
    (month + 2) / 3
}

/// Live filter state shared by the report pages.
///
/// `quarter` and `month` are always populated so the UI keeps its last
/// selection when the mode changes; [`ReportFilter::query_pairs`] decides
/// which of them the active mode actually sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub mode: FilterMode,
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub country_id: Option<i32>,
    pub job_position: Option<String>,
    pub team_number: Option<i32>,
    pub user_id: Option<i64>,
}

impl ReportFilter {
    /// Default page-mount state: current year and quarter, quarterly mode.
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            mode: FilterMode::Quarterly,
            year: today.year(),
            quarter: quarter_of_month(today.month()),
            month: today.month(),
            country_id: None,
            job_position: None,
            team_number: None,
            user_id: None,
        }
    }

    /// Monthly variant of [`ReportFilter::for_date`], used by views that
    /// default to the current month.
    pub fn monthly_for_date(today: NaiveDate) -> Self {
        Self {
            mode: FilterMode::Monthly,
            ..Self::for_date(today)
        }
    }

    /// Query parameters in the order the backend expects.
    ///
    /// Fields that do not apply to the active mode, and unset optional
    /// dimensions, are omitted entirely, never sent as empty strings.
    /// `job_position` is passed through unmodified; the backend is assumed
    /// to compare it case-insensitively.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.mode != FilterMode::All {
            pairs.push(("year", self.year.to_string()));
        }
        if self.mode == FilterMode::Quarterly {
            pairs.push(("quarter", self.quarter.to_string()));
        }
        if self.mode == FilterMode::Monthly {
            pairs.push(("month", self.month.to_string()));
        }
        if let Some(country_id) = self.country_id {
            if country_id > 0 {
                pairs.push(("country_id", country_id.to_string()));
            }
        }
        if let Some(job_position) = &self.job_position {
            if !job_position.is_empty() {
                pairs.push(("job_position", job_position.clone()));
            }
        }
        if let Some(team_number) = self.team_number {
            pairs.push(("team_number", team_number.to_string()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs
    }
}
