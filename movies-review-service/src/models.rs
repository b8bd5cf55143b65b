use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewId")]
    pub review_id: Option<String>,
    #[serde(rename = "movieInfoId")]
    pub movie_info_id: Option<String>,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.movie_info_id.as_deref().is_none_or(|id| id.trim().is_empty()) {
            violations.push("rating.movieInfoId : must not be null".to_string());
        }
        if self.rating < 0.0 {
            violations.push("rating.negative : please pass a non-negative value".to_string());
        } else if self.rating > 10.0 {
            violations
                .push("rating.outOfBounds : please pass a rating between 0 and 10".to_string());
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Review {
        Review {
            review_id: None,
            movie_info_id: Some("1".to_string()),
            comment: "Awesome Movie".to_string(),
            rating: 9.0,
        }
    }

    #[test]
    fn valid_review_has_no_violations() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn missing_movie_info_id_is_a_violation() {
        let review = Review { movie_info_id: None, ..valid() };
        assert_eq!(review.validate(), vec!["rating.movieInfoId : must not be null"]);
    }

    #[test]
    fn negative_rating_is_a_violation() {
        let review = Review { rating: -0.1, ..valid() };
        assert_eq!(review.validate(), vec!["rating.negative : please pass a non-negative value"]);
    }

    #[test]
    fn rating_above_ten_is_a_violation() {
        let review = Review { rating: 10.5, ..valid() };
        assert_eq!(
            review.validate(),
            vec!["rating.outOfBounds : please pass a rating between 0 and 10"]
        );
    }

    #[test]
    fn boundary_ratings_are_accepted() {
        assert!(Review { rating: 0.0, ..valid() }.validate().is_empty());
        assert!(Review { rating: 10.0, ..valid() }.validate().is_empty());
    }
}
