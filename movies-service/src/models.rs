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

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewId")]
    pub review_id: Option<String>,
    #[serde(rename = "movieInfoId")]
    pub movie_info_id: Option<String>,
    pub comment: String,
    pub rating: f64,
}

/// The composite returned by the aggregator. Assembled per request,
/// never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieInfo")]
    pub movie_info: MovieInfo,
    #[serde(rename = "reviewList")]
    pub review_list: Vec<Review>,
}
