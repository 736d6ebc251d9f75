//! Part of speech and word rows.

use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{fixtures::factory, TestContext};

pub struct WordFixtures<'a> {
    setup: &'a TestContext,
}

impl TestContext {
    /// Access word fixture helpers
    pub fn words(&self) -> WordFixtures<'_> {
        WordFixtures { setup: self }
    }
}

impl<'a> WordFixtures<'a> {
    /// Insert the eight part of speech rows
    pub async fn insert_seeded_types(&self) -> Result<(), DbErr> {
        let types = migration::PART_OF_SPEECH_TYPES
            .iter()
            .map(|(id, name)| entity::types::ActiveModel {
                id: ActiveValue::Set(*id),
                name: ActiveValue::Set(name.to_string()),
            });

        entity::prelude::Types::insert_many(types)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }

    /// Insert words with ids `1..=count`, see [`factory`] for their contents
    ///
    /// Requires the seeded types, words reference them by foreign key.
    pub async fn insert_words(&self, count: i32) -> Result<(), DbErr> {
        if count < 1 {
            return Ok(());
        }

        let words = (1..=count).map(|id| entity::words::ActiveModel {
            id: ActiveValue::Set(id),
            word: ActiveValue::Set(factory::word_text(id)),
            type_id: ActiveValue::Set(factory::type_id_for(id)),
        });

        entity::prelude::Words::insert_many(words)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}
