use entity::users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(users::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(users::Column::Username).string().not_null())
                    .col(ColumnDef::new(users::Column::Email).string().not_null())
                    .col(
                        ColumnDef::new(users::Column::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(users::Column::Role).string_len(16).not_null())
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name("PK_users").col(users::Column::Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("UC_users_username")
                    .table(users::Entity)
                    .col(users::Column::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("UC_users_email")
                    .table(users::Entity)
                    .col(users::Column::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
