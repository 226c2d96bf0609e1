use std::fmt;
use std::slice;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::CatalogItem;
use crate::books::dto::BookDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

/// The catalog of a single branch.
///
/// Books are kept in insertion order and are unique by ISBN. Each book moves between
/// `Available` and `CheckedOut` through [`Library::lend_book`] and [`Library::return_book`]
/// until it is removed. Lookups scan the catalog linearly.
///
/// Every accepted change is published to the configured [`EventPublisher`]. The change is
/// applied before the event is published, so a publisher failure is reported to the caller
/// but does not roll the catalog back.
///
/// A `Library` does no locking of its own; wrap it in a mutex to share it across threads.
pub struct Library {
    branch_id: String,
    books: Vec<CatalogItem>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            books: Vec::new(),
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    /// Adds a book, rejecting it with [`LibraryError::DuplicateKey`] when its ISBN is
    /// already in the catalog.
    pub fn add_book<B: Into<CatalogItem>>(&mut self, book: B) -> LibraryResult<()> {
        let book = book.into();
        if self.contains(book.isbn()) {
            warn!(isbn = book.isbn(), branch_id = %self.branch_id, "rejected duplicate isbn");
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", book.isbn()).as_str()));
        }
        let event = DomainEvent::added(&self.branch_id, book.isbn(), &BookDto::from(&book))?;
        info!(isbn = book.isbn(), branch_id = %self.branch_id, "added book");
        self.books.push(book);
        self.events_publisher.publish(&event)
    }

    /// Marks an available book as checked out.
    pub fn lend_book(&mut self, isbn: &str) -> LibraryResult<()> {
        self.transition(isbn, BookStatus::Available, BookStatus::CheckedOut, DomainEvent::lent)
    }

    /// Marks a checked out book as available again.
    pub fn return_book(&mut self, isbn: &str) -> LibraryResult<()> {
        self.transition(isbn, BookStatus::CheckedOut, BookStatus::Available, DomainEvent::returned)
    }

    /// Removes a book whatever its lend state. Removing an unknown ISBN is not an error
    /// and returns `None`.
    pub fn remove_book(&mut self, isbn: &str) -> LibraryResult<Option<CatalogItem>> {
        let Some(pos) = self.position(isbn) else {
            debug!(isbn, branch_id = %self.branch_id, "nothing to remove");
            return Ok(None);
        };
        let removed = self.books.remove(pos);
        info!(isbn, branch_id = %self.branch_id, "removed book");
        let event = DomainEvent::removed(&self.branch_id, isbn, &BookDto::from(&removed))?;
        self.events_publisher.publish(&event)?;
        Ok(Some(removed))
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<&CatalogItem> {
        self.books.iter()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| not_found(isbn))
    }

    /// Books whose author equals `author` exactly (case-sensitive), in insertion order.
    /// The iterator is lazy and reads the catalog as it is when iterated.
    pub fn books_by_author<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.books.iter().filter(move |book| book.author() == author)
    }

    pub fn iter(&self) -> slice::Iter<'_, CatalogItem> {
        self.books.iter()
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.position(isbn).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn() == isbn)
    }

    fn transition(&mut self, isbn: &str, from: BookStatus, to: BookStatus,
                  event: fn(&str, &str, &BookDto) -> serde_json::Result<DomainEvent>) -> LibraryResult<()> {
        let book = self.books.iter_mut()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| not_found(isbn))?;
        let status = book.status();
        if status != from {
            debug!(isbn, branch_id = %self.branch_id, %status, requested = %to, "rejected status change");
            let reason = match status {
                BookStatus::Available => "is already available",
                BookStatus::CheckedOut => "is already checked out",
            };
            return Err(LibraryError::not_available(
                format!("book with isbn {} {}", isbn, reason).as_str(), status));
        }
        book.base_mut().transition(to);
        let event = event(&self.branch_id, isbn, &BookDto::from(&*book))?;
        info!(isbn, branch_id = %self.branch_id, status = %to, "changed lend state");
        self.events_publisher.publish(&event)
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a CatalogItem;
    type IntoIter = slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("branch_id", &self.branch_id)
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

fn not_found(isbn: &str) -> LibraryError {
    LibraryError::not_found(format!("book with isbn {} not found", isbn).as_str())
}
