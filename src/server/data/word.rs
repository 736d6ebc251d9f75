use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect,
};

/// Word joined with the name of its part of speech
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct WordRow {
    pub id: i32,
    pub word: String,
    pub type_name: Option<String>,
}

pub struct WordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WordRepository<'a, C> {
    /// Creates a new instance of [`WordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches up to `limit` words ordered by ascending id, skipping the first `offset`
    ///
    /// Words are left joined with `types` so a word without a matching type still appears
    /// with `type_name` set to `None`.
    pub async fn get_page(&self, offset: u64, limit: u64) -> Result<Vec<WordRow>, DbErr> {
        entity::prelude::Words::find()
            .select_only()
            .column(entity::words::Column::Id)
            .column(entity::words::Column::Word)
            .column_as(entity::types::Column::Name, "type_name")
            .left_join(entity::prelude::Types)
            .order_by_asc(entity::words::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_model::<WordRow>()
            .all(self.db)
            .await
    }

    /// Counts every word in the table
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Words::find().count(self.db).await
    }
}
