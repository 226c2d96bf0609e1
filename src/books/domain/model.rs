use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub const SIZE_REQUIRED: &str = "Download size required for eBooks.";
pub const SIZE_NOT_NUMBER: &str = "Download size must be a number.";
pub const SIZE_NOT_POSITIVE: &str = "Download size must be greater than zero.";

// BookEntity abstracts a physical book in the catalog; it also carries the fields
// an eBook shares with it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    isbn: String,
    title: String,
    author: String,
    book_status: BookStatus,
    version: i64,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> LibraryResult<Self> {
        let now = Utc::now().naive_utc();
        Ok(Self {
            isbn: required("isbn", isbn)?,
            title: required("title", title)?,
            author: required("author", author)?,
            book_status: BookStatus::Available,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub(crate) fn transition(&mut self, to: BookStatus) {
        self.book_status = to;
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn render_summary(&self) -> String {
        format!("{} by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.book_status.label())
    }
}

// EBookEntity is an electronic book with a download size in megabytes.
#[derive(Debug, Clone, PartialEq)]
pub struct EBookEntity {
    book: BookEntity,
    download_size_mb: f64,
}

impl EBookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, download_size_mb: f64) -> LibraryResult<Self> {
        let book = BookEntity::new(title, author, isbn)?;
        if !download_size_mb.is_finite() || download_size_mb <= 0.0 {
            return Err(LibraryError::validation(SIZE_NOT_POSITIVE, Some("download_size".to_string())));
        }
        Ok(Self { book, download_size_mb })
    }

    // Builds an eBook from the raw text a user typed into the size field.
    pub fn parse(title: &str, author: &str, isbn: &str, download_size: &str) -> LibraryResult<Self> {
        let download_size = download_size.trim();
        if download_size.is_empty() {
            return Err(LibraryError::validation(SIZE_REQUIRED, Some("download_size".to_string())));
        }
        let size = download_size.parse::<f64>()
            .map_err(|_| LibraryError::validation(SIZE_NOT_NUMBER, Some("download_size".to_string())))?;
        Self::new(title, author, isbn, size)
    }

    pub fn download_size_mb(&self) -> f64 {
        self.download_size_mb
    }

    pub fn book(&self) -> &BookEntity {
        &self.book
    }
}

impl Identifiable for EBookEntity {
    fn id(&self) -> &str {
        self.book.id()
    }

    fn version(&self) -> i64 {
        self.book.version()
    }
}

impl Book for EBookEntity {
    fn title(&self) -> &str {
        self.book.title()
    }

    fn author(&self) -> &str {
        self.book.author()
    }

    fn status(&self) -> BookStatus {
        self.book.status()
    }

    fn render_summary(&self) -> String {
        // whole sizes keep their decimal, 5.0 renders as "5.0"
        format!("{}, Size: {:?}MB", self.book.render_summary(), self.download_size_mb)
    }
}

// CatalogItem is what a library stores: either variant, lent and returned through
// the shared BookEntity fields.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Print(BookEntity),
    Electronic(EBookEntity),
}

impl CatalogItem {
    pub fn base(&self) -> &BookEntity {
        match self {
            CatalogItem::Print(book) => book,
            CatalogItem::Electronic(ebook) => &ebook.book,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut BookEntity {
        match self {
            CatalogItem::Print(book) => book,
            CatalogItem::Electronic(ebook) => &mut ebook.book,
        }
    }

    pub fn download_size_mb(&self) -> Option<f64> {
        match self {
            CatalogItem::Print(_) => None,
            CatalogItem::Electronic(ebook) => Some(ebook.download_size_mb),
        }
    }
}

impl From<BookEntity> for CatalogItem {
    fn from(book: BookEntity) -> Self {
        CatalogItem::Print(book)
    }
}

impl From<EBookEntity> for CatalogItem {
    fn from(ebook: EBookEntity) -> Self {
        CatalogItem::Electronic(ebook)
    }
}

impl Identifiable for CatalogItem {
    fn id(&self) -> &str {
        self.base().id()
    }

    fn version(&self) -> i64 {
        self.base().version()
    }
}

impl Book for CatalogItem {
    fn title(&self) -> &str {
        self.base().title()
    }

    fn author(&self) -> &str {
        self.base().author()
    }

    fn status(&self) -> BookStatus {
        self.base().status()
    }

    fn render_summary(&self) -> String {
        match self {
            CatalogItem::Print(book) => book.render_summary(),
            CatalogItem::Electronic(ebook) => ebook.render_summary(),
        }
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_summary())
    }
}

// Blank means empty or whitespace only; accepted values are stored as given.
fn required(field: &str, value: &str) -> LibraryResult<String> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(
            format!("{} is required", field).as_str(), Some(field.to_string())));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::{BookEntity, CatalogItem, EBookEntity, SIZE_NOT_NUMBER, SIZE_NOT_POSITIVE, SIZE_REQUIRED};
    use crate::core::domain::Identifiable;
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("1984", "Orwell", "isbn1").expect("should build book");
        assert_eq!("1984", book.title());
        assert_eq!("Orwell", book.author());
        assert_eq!("isbn1", book.isbn());
        assert_eq!(0, book.version());
        assert!(book.is_available());
    }

    #[test]
    fn test_should_keep_fields_as_given() {
        let book = BookEntity::new(" 1984", "Orwell ", " isbn1 ").expect("should build book");
        assert_eq!(" isbn1 ", book.isbn());
        assert_eq!(" 1984", book.title());
        assert_eq!(" 1984 by Orwell  (ISBN:  isbn1 ) - Available", book.render_summary());
    }

    #[test]
    fn test_should_reject_blank_fields() {
        for (title, author, isbn, field) in [("", "a", "i", "title"), ("t", " ", "i", "author"), ("t", "a", "", "isbn")] {
            let err = BookEntity::new(title, author, isbn).expect_err("should reject");
            assert_eq!(LibraryError::validation(format!("{} is required", field).as_str(), Some(field.to_string())), err);
        }
    }

    #[test]
    fn test_should_render_checked_out_book() {
        let mut book = BookEntity::new("1984", "Orwell", "isbn1").expect("should build book");
        book.transition(BookStatus::CheckedOut);
        assert_eq!("1984 by Orwell (ISBN: isbn1) - Checked out", book.render_summary());
        assert_eq!(1, book.version());
        assert!(book.updated_at() >= book.created_at());
    }

    #[test]
    fn test_should_build_ebooks() {
        let ebook = EBookEntity::new("Brave New World", "Huxley", "isbn2", 5.5).expect("should build ebook");
        assert_eq!(5.5, ebook.download_size_mb());
        assert_eq!("Brave New World by Huxley (ISBN: isbn2) - Available, Size: 5.5MB", ebook.render_summary());
        let whole = EBookEntity::new("Brave New World", "Huxley", "isbn2", 5.0).expect("should build ebook");
        assert_eq!("Brave New World by Huxley (ISBN: isbn2) - Available, Size: 5.0MB", whole.render_summary());
    }

    #[test]
    fn test_should_reject_invalid_sizes() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = EBookEntity::new("t", "a", "i", size).expect_err("should reject");
            assert_eq!(SIZE_NOT_POSITIVE, err.message());
        }
    }

    #[test]
    fn test_should_parse_ebook_size() {
        let ebook = EBookEntity::parse("t", "a", "i", " 12.25 ").expect("should parse");
        assert_eq!(12.25, ebook.download_size_mb());
        assert_eq!(SIZE_REQUIRED, EBookEntity::parse("t", "a", "i", "  ").expect_err("should reject").message());
        assert_eq!(SIZE_NOT_NUMBER, EBookEntity::parse("t", "a", "i", "big").expect_err("should reject").message());
        assert_eq!(SIZE_NOT_POSITIVE, EBookEntity::parse("t", "a", "i", "-3").expect_err("should reject").message());
    }

    #[test]
    fn test_should_share_lend_state_across_variants() {
        let mut item = CatalogItem::from(EBookEntity::new("t", "a", "isbn3", 1.0).expect("should build ebook"));
        item.base_mut().transition(BookStatus::CheckedOut);
        assert_eq!(BookStatus::CheckedOut, item.status());
        assert_eq!(Some(1.0), item.download_size_mb());
        assert_eq!("t by a (ISBN: isbn3) - Checked out, Size: 1.0MB", item.to_string());

        let print = CatalogItem::from(BookEntity::new("t", "a", "isbn4").expect("should build book"));
        assert_eq!(None, print.download_size_mb());
        assert_eq!("isbn4", print.id());
    }
}
