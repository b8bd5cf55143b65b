use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::{entities::review, error::AppResult, models::Review};

#[derive(Clone)]
pub struct ReviewRepository {
    db: DatabaseConnection,
}

impl ReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn save(&self, rev: Review) -> AppResult<Review> {
        let id = rev.review_id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let model = review::ActiveModel {
            review_id: Set(id.clone()),
            movie_info_id: Set(rev.movie_info_id.clone().unwrap_or_default()),
            comment: Set(rev.comment.clone()),
            rating: Set(rev.rating),
        };

        review::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(review::Column::ReviewId)
                    .update_columns([
                        review::Column::MovieInfoId,
                        review::Column::Comment,
                        review::Column::Rating,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(Review { review_id: Some(id), ..rev })
    }

    pub async fn find_all(&self, movie_info_id: Option<&str>) -> AppResult<Vec<Review>> {
        let mut query = review::Entity::find();
        if let Some(movie_info_id) = movie_info_id {
            query = query.filter(review::Column::MovieInfoId.eq(movie_info_id));
        }

        let rows = query.all(&self.db).await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    pub async fn update(&self, id: &str, changes: Review) -> AppResult<Option<Review>> {
        let Some(existing) = review::Entity::find_by_id(id.to_string()).one(&self.db).await?
        else {
            return Ok(None);
        };

        let mut model: review::ActiveModel = existing.into();
        if let Some(movie_info_id) = changes.movie_info_id {
            model.movie_info_id = Set(movie_info_id);
        }
        model.comment = Set(changes.comment);
        model.rating = Set(changes.rating);

        let updated = model.update(&self.db).await?;
        Ok(Some(to_domain(updated)))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        review::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(())
    }
}

fn to_domain(row: review::Model) -> Review {
    Review {
        review_id: Some(row.review_id),
        movie_info_id: Some(row.movie_info_id),
        comment: row.comment,
        rating: row.rating,
    }
}
