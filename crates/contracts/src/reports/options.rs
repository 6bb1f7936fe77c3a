use serde::{Deserialize, Serialize};

/// Country option for the country dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name_th: String,
    pub name_en: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosition {
    pub job_position: String,
}

/// Backend user row. The API spells the primary key `ID`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "ID")]
    pub id: i64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub job_position: String,
    pub team_number: i32,
}

impl UserAccount {
    /// Dropdown label: nickname when present, otherwise the full name.
    pub fn display_name(&self) -> String {
        if !self.nickname.is_empty() {
            self.nickname.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string()
        }
    }
}
