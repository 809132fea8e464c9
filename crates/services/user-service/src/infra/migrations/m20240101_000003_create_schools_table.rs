//! Migration: Create schools table.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_organizations_table::Organizations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Schools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Schools::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::Address).string().not_null())
                    .col(ColumnDef::new(Schools::City).string().not_null())
                    .col(ColumnDef::new(Schools::State).string().not_null())
                    .col(ColumnDef::new(Schools::Zip).string().not_null())
                    .col(ColumnDef::new(Schools::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Schools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schools::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schools_organization_id")
                            .from(Schools::Table, Schools::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schools_organization_id")
                    .table(Schools::Table)
                    .col(Schools::OrganizationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
    OrganizationId,
    Name,
    Address,
    City,
    State,
    Zip,
    Phone,
    CreatedAt,
    UpdatedAt,
}
