//! SeaORM entity for the `food_scan_results` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "food_scan_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pet_id: Uuid,
    pub food_name: Option<String>,
    pub calories: Option<i32>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub moisture: Option<f64>,
    pub is_safe: Option<bool>,
    #[sea_orm(column_type = "Text", nullable)]
    pub safety_message: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub toxic_ingredients: Option<String>,
    pub nutrition_health_score: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub health_score_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub health_score_recommendations: Option<String>,
    pub has_multiple_items: Option<bool>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pets::Entity",
        from = "Column::PetId",
        to = "super::pets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pets,
}

impl Related<super::pets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
