//! Paginated word list queries.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        session::DEFAULT_ROWS_PER_PAGE,
        wordlist::{PageResultDto, ReadOneDto, WordDto},
    },
    server::{data::word::WordRepository, error::Error},
};

/// Largest offset or limit the database drivers accept as a signed 64-bit bind value
const MAX_SQL_BOUND: u64 = i64::MAX as u64;

pub struct WordListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WordListService<'a> {
    /// Creates a new instance of [`WordListService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads one page of the word table
    ///
    /// `page` is clamped to at least 1 and a `rows_per_page` of 0 falls back to the default of
    /// 5. Rows are always ordered by ascending word id. Pages past the end return no rows while
    /// still reporting the table's totals.
    ///
    /// # Returns
    /// - `Ok(PageResultDto)`: Rows of the page with `page_count = ceil(total_rows / rows_per_page)`
    /// - `Err(Error::DbErr)`: Either query failed
    pub async fn read_any(&self, page: u64, rows_per_page: u64) -> Result<PageResultDto, Error> {
        let page = page.max(1);
        let rows_per_page = match rows_per_page {
            0 => DEFAULT_ROWS_PER_PAGE,
            rows_per_page => rows_per_page,
        };
        let offset = (page - 1).saturating_mul(rows_per_page);

        let repository = WordRepository::new(self.db);

        let total_rows = repository.count().await?;

        let rows = if offset >= total_rows {
            Vec::new()
        } else {
            repository
                .get_page(offset.min(MAX_SQL_BOUND), rows_per_page.min(MAX_SQL_BOUND))
                .await?
        };

        Ok(PageResultDto {
            rows: rows
                .into_iter()
                .map(|row| WordDto {
                    id: row.id,
                    word: row.word,
                    word_type: row.type_name,
                })
                .collect(),
            page_count: total_rows.div_ceil(rows_per_page),
            page,
            rows_per_page,
            total_rows,
        })
    }

    /// Detail lookup for a single word, currently echoing the requested id
    pub fn read_one(&self, id: u64) -> ReadOneDto {
        ReadOneDto { id }
    }
}
