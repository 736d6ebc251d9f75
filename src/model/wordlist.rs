use serde::{Deserialize, Serialize};

/// A single word joined with its part-of-speech name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WordDto {
    pub id: i32,
    pub word: String,
    /// Part-of-speech name, absent when the word references no known type
    #[serde(rename = "type")]
    pub word_type: Option<String>,
}

/// One page of the word table plus pagination metadata
///
/// `page_count` is always `ceil(total_rows / rows_per_page)` and `rows` never holds more than
/// `rows_per_page` entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageResultDto {
    pub rows: Vec<WordDto>,
    pub page_count: u64,
    pub page: u64,
    pub rows_per_page: u64,
    pub total_rows: u64,
}

/// Response of the word detail stub
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReadOneDto {
    pub id: u64,
}
