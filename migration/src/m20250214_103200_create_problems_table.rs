use entity::problems;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(problems::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(problems::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(problems::Column::Title).string().not_null())
                    .col(
                        ColumnDef::new(problems::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::Difficulty)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::Tags)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::StarterCode)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(problems::Column::Solution).text().null())
                    .col(
                        ColumnDef::new(problems::Column::TestCases)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(problems::Column::CreatedBy).uuid().null())
                    .col(
                        ColumnDef::new(problems::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("PK_problems")
                            .col(problems::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("UC_problems_title")
                    .table(problems::Entity)
                    .col(problems::Column::Title)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(problems::Entity).to_owned())
            .await
    }
}
