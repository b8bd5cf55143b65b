use std::sync::Arc;

use jiff::civil::date;
use movies_info_service::{
    AppState, app, db, models::MovieInfo, repository::MovieInfoRepository,
};

async fn spawn_app() -> (String, MovieInfoRepository) {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let repository = MovieInfoRepository::new(db);
    let state = Arc::new(AppState { repository: repository.clone() });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    (format!("http://{addr}/v1/movieinfos"), repository)
}

fn movie_info(id: Option<&str>, name: &str, year: i32, cast: &[&str], released: &str) -> MovieInfo {
    MovieInfo {
        movie_info_id: id.map(String::from),
        name: name.to_string(),
        year,
        cast: cast.iter().map(|s| s.to_string()).collect(),
        release_date: released.parse().unwrap(),
    }
}

async fn seed(repository: &MovieInfoRepository) {
    let movies = [
        movie_info(None, "Batman Begins", 2005, &["Christian Bale", "Michael Cane"], "2005-06-15"),
        movie_info(None, "The Dark Knight", 2008, &["Christian Bale", "HeathLedger"], "2008-07-18"),
        movie_info(
            Some("abc"),
            "Dark Knight Rises",
            2012,
            &["Christian Bale", "Tom Hardy"],
            "2012-07-20",
        ),
    ];
    for movie in movies {
        repository.save(movie).await.unwrap();
    }
}

#[tokio::test]
async fn add_movie_info_assigns_an_id() {
    let (base, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let body = movie_info(None, "DON", 2010, &["SRK", "PC"], "2010-06-15");
    let resp = client.post(&base).json(&body).send().await.unwrap();

    assert_eq!(resp.status(), 201);
    let saved: MovieInfo = resp.json().await.unwrap();
    assert!(saved.movie_info_id.is_some());
    assert_eq!(saved.name, "DON");
    assert_eq!(saved.year, 2010);
}

#[tokio::test]
async fn round_trip_preserves_all_fields() {
    let (base, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let body = movie_info(None, "DON", 2010, &["SRK", "PC"], "2010-06-15");
    let saved: MovieInfo =
        client.post(&base).json(&body).send().await.unwrap().json().await.unwrap();
    let id = saved.movie_info_id.clone().unwrap();

    let fetched: MovieInfo =
        client.get(format!("{base}/{id}")).send().await.unwrap().json().await.unwrap();

    assert_eq!(fetched, MovieInfo { movie_info_id: Some(id), ..body });
}

#[tokio::test]
async fn get_all_movie_infos_returns_everything() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;

    let infos: Vec<MovieInfo> =
        reqwest::get(&base).await.unwrap().json().await.unwrap();
    assert_eq!(infos.len(), 3);
}

#[tokio::test]
async fn get_all_movie_infos_filters_by_year() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;

    let infos: Vec<MovieInfo> =
        reqwest::get(format!("{base}?year=2012")).await.unwrap().json().await.unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].name, "Dark Knight Rises");
}

#[tokio::test]
async fn get_all_movie_infos_filters_by_name() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;

    let infos: Vec<MovieInfo> = reqwest::get(format!("{base}?name=Dark%20Knight%20Rises"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].year, 2012);
}

#[tokio::test]
async fn get_movie_info_by_id_returns_the_persisted_row() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;

    let resp = reqwest::get(format!("{base}/abc")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let info: MovieInfo = resp.json().await.unwrap();
    assert_eq!(info.movie_info_id.as_deref(), Some("abc"));
    assert_eq!(info.name, "Dark Knight Rises");
    assert_eq!(info.release_date, date(2012, 7, 20));
}

#[tokio::test]
async fn get_movie_info_by_unknown_id_is_404() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;

    let resp = reqwest::get(format!("{base}/abcd")).await.unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "");
}

#[tokio::test]
async fn update_movie_info_overwrites_fields() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;
    let client = reqwest::Client::new();

    let body = movie_info(
        Some("abc"),
        "Dark Knight Rises - 1",
        2012,
        &["Christian Bale", "Tom Hardy"],
        "2012-07-20",
    );
    let resp = client.put(format!("{base}/abc")).json(&body).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let updated: MovieInfo = resp.json().await.unwrap();
    assert_eq!(updated.name, "Dark Knight Rises - 1");
}

#[tokio::test]
async fn update_movie_info_with_unknown_id_is_404() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;
    let client = reqwest::Client::new();

    let body = movie_info(None, "Nope", 2020, &["Nobody"], "2020-01-01");
    let resp = client.put(format!("{base}/abcd")).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_movie_info_is_204_and_removes_the_row() {
    let (base, repository) = spawn_app().await;
    seed(&repository).await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/abc")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = reqwest::get(format!("{base}/abc")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn invalid_movie_info_is_rejected_with_sorted_violations() {
    let (base, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let body = movie_info(None, "", -2005, &[], "2005-06-15");
    let resp = client.post(&base).json(&body).send().await.unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "movieInfo.cast must be present, movieInfo.name must be present, \
         movieInfo.year must be a Positive Value"
    );
}
