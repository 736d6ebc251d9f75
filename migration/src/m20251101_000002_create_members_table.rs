use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_roles_table::Roles;

static FK_MEMBERS_ROLE_ID: &str = "fk_members_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(pk_auto(Members::Id))
                    .col(string_null(Members::FirstName))
                    .col(string_null(Members::LastName))
                    .col(string_uniq(Members::Email))
                    .col(boolean(Members::EmailValidated).default(false))
                    .col(string_null(Members::EmailValidationToken))
                    .col(string_null(Members::PasswordResetToken))
                    .col(string(Members::Password))
                    .col(timestamp(Members::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Members::UpdatedAt).default(Expr::current_timestamp()))
                    .col(integer(Members::RoleId).default(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBERS_ROLE_ID)
                    .from_tbl(Members::Table)
                    .from_col(Members::RoleId)
                    .to_tbl(Roles::Table)
                    .to_col(Roles::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEMBERS_ROLE_ID)
                    .table(Members::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    EmailValidated,
    EmailValidationToken,
    PasswordResetToken,
    Password,
    CreatedAt,
    UpdatedAt,
    RoleId,
}
