//! SeaORM entity for the `pets` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
    pub avatar: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub allergy_summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub vaccination_summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub relationship: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub behavior_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub food_preferences: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(has_many = "super::reminders::Entity")]
    Reminders,
    #[sea_orm(has_many = "super::vaccinations::Entity")]
    Vaccinations,
    #[sea_orm(has_many = "super::allergies::Entity")]
    Allergies,
    #[sea_orm(has_many = "super::insurances::Entity")]
    Insurances,
    #[sea_orm(has_many = "super::medical_conditions::Entity")]
    MedicalConditions,
    #[sea_orm(has_many = "super::medications::Entity")]
    Medications,
    #[sea_orm(has_many = "super::food_scan_results::Entity")]
    FoodScanResults,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::reminders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reminders.def()
    }
}

impl Related<super::vaccinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vaccinations.def()
    }
}

impl Related<super::allergies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Allergies.def()
    }
}

impl Related<super::insurances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Insurances.def()
    }
}

impl Related<super::medical_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalConditions.def()
    }
}

impl Related<super::medications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medications.def()
    }
}

impl Related<super::food_scan_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodScanResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
