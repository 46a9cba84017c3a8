//! Migration: Create login accounts table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAccounts::Username)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAccounts::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(UserAccounts::Authorities)
                            .string()
                            .not_null()
                            .default("ROLE_USER"),
                    )
                    .col(
                        ColumnDef::new(UserAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAccounts {
    Table,
    Username,
    PasswordHash,
    Authorities,
    CreatedAt,
}
