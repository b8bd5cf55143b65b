use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_info_id: String,
    pub name: String,
    pub year: i32,
    pub cast_members: String,
    pub release_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
