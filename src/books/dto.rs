use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::CatalogItem;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object handed to presentation layers and event payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_size_mb: Option<f64>,
    pub summary: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn is_ebook(&self) -> bool {
        self.download_size_mb.is_some()
    }
}

impl From<&CatalogItem> for BookDto {
    fn from(other: &CatalogItem) -> Self {
        Self {
            isbn: other.isbn().to_string(),
            version: other.version(),
            title: other.title().to_string(),
            author: other.author().to_string(),
            book_status: other.status(),
            download_size_mb: other.download_size_mb(),
            summary: other.render_summary(),
            created_at: other.base().created_at(),
            updated_at: other.base().updated_at(),
        }
    }
}
