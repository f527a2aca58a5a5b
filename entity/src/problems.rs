use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_PROBLEMS: &str = "PK_problems";
    pub const UC_PROBLEMS_TITLE: &str = "UC_problems_title";
}

pub const DEFAULT_STARTER_CODE: &str = "// Write your code here";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Tags,
    pub starter_code: String,
    pub solution: Option<String>,
    pub test_cases: TestCases,
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Difficulty {
    #[sea_orm(string_value = "Easy")]
    Easy,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Hard")]
    Hard,
}

/// Display-ordered list of tags, stored as a jsonb column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

/// Example test cases in authoring order, stored as a jsonb column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TestCases(pub Vec<TestCase>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
