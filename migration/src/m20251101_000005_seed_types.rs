use sea_orm_migration::prelude::*;

use crate::m20251101_000003_create_types_table::Types;

/// Fixed part-of-speech rows seeded into `types`
pub const PART_OF_SPEECH_TYPES: [(i32, &str); 8] = [
    (1, "Noun"),
    (2, "Pronoun"),
    (3, "Adjective"),
    (4, "Verb"),
    (5, "Adverb"),
    (6, "Preposition"),
    (7, "Conjunction"),
    (8, "interjection"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Types::Table).to_owned())
            .await?;

        let mut insert = Query::insert()
            .into_table(Types::Table)
            .columns([Types::Id, Types::Name])
            .to_owned();

        for (id, name) in PART_OF_SPEECH_TYPES {
            insert
                .values([id.into(), name.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids = PART_OF_SPEECH_TYPES.iter().map(|(id, _)| *id);

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Types::Table)
                    .and_where(Expr::col(Types::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
