use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieInfo {
    #[serde(rename = "movieInfoId")]
    pub movie_info_id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: Date,
}

impl MovieInfo {
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push("movieInfo.name must be present".to_string());
        }
        if self.year <= 0 {
            violations.push("movieInfo.year must be a Positive Value".to_string());
        }
        if self.cast.is_empty() || self.cast.iter().any(|member| member.trim().is_empty()) {
            violations.push("movieInfo.cast must be present".to_string());
        }
        violations
    }
}
