use jiff::civil::Date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::{
    entities::movie_info,
    error::{AppError, AppResult},
    models::MovieInfo,
};

#[derive(Clone)]
pub struct MovieInfoRepository {
    db: DatabaseConnection,
}

impl MovieInfoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn save(&self, info: MovieInfo) -> AppResult<MovieInfo> {
        let id = info
            .movie_info_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let model = movie_info::ActiveModel {
            movie_info_id: Set(id.clone()),
            name: Set(info.name.clone()),
            year: Set(info.year),
            cast_members: Set(encode_cast(&info.cast)?),
            release_date: Set(info.release_date.to_string()),
        };

        movie_info::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(movie_info::Column::MovieInfoId)
                    .update_columns([
                        movie_info::Column::Name,
                        movie_info::Column::Year,
                        movie_info::Column::CastMembers,
                        movie_info::Column::ReleaseDate,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(MovieInfo { movie_info_id: Some(id), ..info })
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<MovieInfo>> {
        let row = movie_info::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        row.map(to_domain).transpose()
    }

    pub async fn find_all(
        &self,
        year: Option<i32>,
        name: Option<&str>,
    ) -> AppResult<Vec<MovieInfo>> {
        let mut query = movie_info::Entity::find();
        if let Some(year) = year {
            query = query.filter(movie_info::Column::Year.eq(year));
        }
        if let Some(name) = name {
            query = query.filter(movie_info::Column::Name.eq(name));
        }

        let rows = query.all(&self.db).await?;
        rows.into_iter().map(to_domain).collect()
    }

    pub async fn update(&self, id: &str, changes: MovieInfo) -> AppResult<Option<MovieInfo>> {
        let Some(existing) = movie_info::Entity::find_by_id(id.to_string()).one(&self.db).await?
        else {
            return Ok(None);
        };

        let mut model: movie_info::ActiveModel = existing.into();
        model.name = Set(changes.name);
        model.year = Set(changes.year);
        model.cast_members = Set(encode_cast(&changes.cast)?);
        model.release_date = Set(changes.release_date.to_string());

        let updated = model.update(&self.db).await?;
        to_domain(updated).map(Some)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        movie_info::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(())
    }
}

fn encode_cast(cast: &[String]) -> AppResult<String> {
    serde_json::to_string(cast).map_err(|err| AppError::Decode(err.to_string()))
}

fn to_domain(row: movie_info::Model) -> AppResult<MovieInfo> {
    let cast: Vec<String> = serde_json::from_str(&row.cast_members)
        .map_err(|err| AppError::Decode(format!("cast of {}: {err}", row.movie_info_id)))?;
    let release_date: Date = row
        .release_date
        .parse()
        .map_err(|err| AppError::Decode(format!("release_date of {}: {err}", row.movie_info_id)))?;

    Ok(MovieInfo {
        movie_info_id: Some(row.movie_info_id),
        name: row.name,
        year: row.year,
        cast,
        release_date,
    })
}
