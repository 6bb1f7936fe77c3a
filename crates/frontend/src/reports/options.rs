//! Filter option loading plus the dependent-filter rules
//!
//! The four dropdown sources (countries, teams, job positions, users) are
//! fetched jointly on page mount. The user dropdown then follows the team
//! and job-position selections: it only shows matching users, and a selected
//! user that falls out of range is cleared.

use contracts::reports::options::{Country, JobPosition, Team, UserAccount};
use contracts::shared::envelope::parse_rows;
use futures::join;

use crate::shared::api_utils::{get_json, ApiError};

/// All dropdown option lists a report page needs.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub countries: Vec<Country>,
    pub teams: Vec<Team>,
    pub job_positions: Vec<JobPosition>,
    pub users: Vec<UserAccount>,
}

pub async fn fetch_countries(token: Option<&str>) -> Result<Vec<Country>, ApiError> {
    let body = get_json("/api/countries", &[], token).await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("countries: unexpected response shape, treating as empty");
        Vec::new()
    }))
}

pub async fn fetch_teams(token: Option<&str>) -> Result<Vec<Team>, ApiError> {
    let body = get_json("/api/teams", &[], token).await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("teams: unexpected response shape, treating as empty");
        Vec::new()
    }))
}

pub async fn fetch_job_positions(token: Option<&str>) -> Result<Vec<JobPosition>, ApiError> {
    let body = get_json("/api/job-positions", &[], token).await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("job-positions: unexpected response shape, treating as empty");
        Vec::new()
    }))
}

pub async fn fetch_users(token: Option<&str>) -> Result<Vec<UserAccount>, ApiError> {
    let body = get_json("/api/users", &[], token).await?;
    Ok(parse_rows(body).unwrap_or_else(|| {
        log::warn!("users: unexpected response shape, treating as empty");
        Vec::new()
    }))
}

/// Load every option list concurrently. If any single fetch fails the whole
/// load is reported as failed; the page falls back to empty dropdowns.
pub async fn load_filter_options(token: Option<&str>) -> Result<FilterOptions, ApiError> {
    let (countries, teams, job_positions, users) = join!(
        fetch_countries(token),
        fetch_teams(token),
        fetch_job_positions(token),
        fetch_users(token),
    );
    let mut countries = countries?;
    sort_countries_by_thai(&mut countries);
    Ok(FilterOptions {
        countries,
        teams: teams?,
        job_positions: job_positions?,
        users: users?,
    })
}

/// Order countries by their Thai name for the dropdown.
pub fn sort_countries_by_thai(countries: &mut [Country]) {
    countries.sort_by(|a, b| a.name_th.cmp(&b.name_th));
}

/// Users matching the current team and job-position selections.
/// Job positions compare case-insensitively.
pub fn filter_users(
    users: &[UserAccount],
    team_number: Option<i32>,
    job_position: Option<&str>,
) -> Vec<UserAccount> {
    users
        .iter()
        .filter(|user| {
            let matches_team = team_number.is_none_or(|team| user.team_number == team);
            let matches_position = job_position
                .is_none_or(|position| user.job_position.eq_ignore_ascii_case(position));
            matches_team && matches_position
        })
        .cloned()
        .collect()
}

/// Keep a selected user id only while it is still in the visible list.
pub fn retain_valid_user(selected: Option<i64>, visible: &[UserAccount]) -> Option<i64> {
    selected.filter(|id| visible.iter().any(|user| user.id == *id))
}

/// The job-position dropdown shows only TS and CRM, as `(value, label)`
/// pairs. TS staff are labelled "เซลล์".
pub fn visible_job_positions(positions: &[JobPosition]) -> Vec<(String, String)> {
    positions
        .iter()
        .filter_map(|position| {
            let value = position.job_position.clone();
            match value.to_lowercase().as_str() {
                "ts" => Some((value, "เซลล์".to_string())),
                "crm" => Some((value, "CRM".to_string())),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, team_number: i32, job_position: &str) -> UserAccount {
        UserAccount {
            id,
            user_id: format!("emp-{}", id),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            nickname: String::new(),
            job_position: job_position.to_string(),
            team_number,
        }
    }

    fn users() -> Vec<UserAccount> {
        vec![
            user(1, 1, "ts"),
            user(2, 1, "CRM"),
            user(3, 2, "TS"),
            user(4, 2, "crm"),
            user(5, 3, "admin"),
        ]
    }

    #[test]
    fn test_filter_users_no_constraints_keeps_all() {
        assert_eq!(filter_users(&users(), None, None).len(), 5);
    }

    #[test]
    fn test_filter_users_by_team() {
        let visible = filter_users(&users(), Some(2), None);
        assert_eq!(visible.iter().map(|u| u.id).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_filter_users_job_position_case_insensitive() {
        let visible = filter_users(&users(), None, Some("ts"));
        assert_eq!(visible.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
        let visible = filter_users(&users(), None, Some("CRM"));
        assert_eq!(visible.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_filter_users_both_constraints() {
        let visible = filter_users(&users(), Some(1), Some("crm"));
        assert_eq!(visible.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
        for user in &visible {
            assert_eq!(user.team_number, 1);
            assert!(user.job_position.eq_ignore_ascii_case("crm"));
        }
    }

    #[test]
    fn test_retain_valid_user_keeps_visible_selection() {
        let visible = filter_users(&users(), Some(1), None);
        assert_eq!(retain_valid_user(Some(2), &visible), Some(2));
    }

    #[test]
    fn test_retain_valid_user_clears_out_of_range_selection() {
        let visible = filter_users(&users(), Some(1), None);
        assert_eq!(retain_valid_user(Some(3), &visible), None);
        assert_eq!(retain_valid_user(None, &visible), None);
    }

    #[test]
    fn test_visible_job_positions_keeps_only_ts_and_crm() {
        let positions = vec![
            JobPosition {
                job_position: "TS".to_string(),
            },
            JobPosition {
                job_position: "crm".to_string(),
            },
            JobPosition {
                job_position: "admin".to_string(),
            },
        ];
        assert_eq!(
            visible_job_positions(&positions),
            vec![
                ("TS".to_string(), "เซลล์".to_string()),
                ("crm".to_string(), "CRM".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_countries_by_thai_name() {
        let mut countries = vec![
            Country {
                id: 1,
                name_th: "ไทย".to_string(),
                name_en: "Thailand".to_string(),
            },
            Country {
                id: 2,
                name_th: "ญี่ปุ่น".to_string(),
                name_en: "Japan".to_string(),
            },
        ];
        sort_countries_by_thai(&mut countries);
        assert_eq!(countries[0].name_en, "Japan");
        assert_eq!(countries[1].name_en, "Thailand");
    }
}
