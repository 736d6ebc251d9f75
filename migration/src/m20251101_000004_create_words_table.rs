use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_create_types_table::Types;

static FK_WORDS_TYPE_ID: &str = "fk_words_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Words::Table)
                    .if_not_exists()
                    .col(pk_auto(Words::Id))
                    .col(text(Words::Word))
                    .col(integer(Words::TypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WORDS_TYPE_ID)
                    .from_tbl(Words::Table)
                    .from_col(Words::TypeId)
                    .to_tbl(Types::Table)
                    .to_col(Types::Id)
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
                    .name(FK_WORDS_TYPE_ID)
                    .table(Words::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Words::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Words {
    Table,
    Id,
    Word,
    TypeId,
}
