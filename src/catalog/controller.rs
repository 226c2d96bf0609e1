use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::Library;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ControllerError, Severity, user_error};

pub const FIELDS_REQUIRED: &str = "Title, Author, and ISBN are required.";
pub const NO_BOOKS_BY_AUTHOR: &str = "No books by this author.";

// CatalogController turns form input into catalog commands and their outcome into
// the messages shown to the user. Blank isbn or author input means the user
// cancelled the prompt, so nothing happens and `None` (or no lines) is returned.
#[derive(Debug)]
pub struct CatalogController {
    library: Library,
}

impl CatalogController {
    pub fn new(library: Library) -> Self {
        Self {
            library,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(factory::create_library(&state.config, state.publisher))
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str,
                    download_size: Option<&str>) -> Result<String, ControllerError> {
        let (title, author, isbn) = (title.trim(), author.trim(), isbn.trim());
        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return Err(user_error(FIELDS_REQUIRED));
        }
        let req = match download_size {
            Some(size) => AddBookCommandRequest::ebook(title, author, isbn, size),
            None => AddBookCommandRequest::new(title, author, isbn),
        };
        let res = AddBookCommand::new(&mut self.library).execute(req)?;
        Ok(format!("Book '{}' added to the library.", res.book.title))
    }

    pub fn lend_book(&mut self, isbn: &str) -> Result<Option<String>, ControllerError> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(None);
        }
        LendBookCommand::new(&mut self.library).execute(LendBookCommandRequest::new(isbn))?;
        Ok(Some("Book lent successfully.".to_string()))
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<Option<String>, ControllerError> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(None);
        }
        ReturnBookCommand::new(&mut self.library).execute(ReturnBookCommandRequest::new(isbn))?;
        Ok(Some("Book returned successfully.".to_string()))
    }

    pub fn remove_book(&mut self, isbn: &str) -> Result<Option<String>, ControllerError> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(None);
        }
        RemoveBookCommand::new(&mut self.library).execute(RemoveBookCommandRequest::new(isbn))?;
        Ok(Some("Book removed from library.".to_string()))
    }

    pub fn books_by_author(&self, author: &str) -> Result<Vec<String>, ControllerError> {
        let author = author.trim();
        if author.is_empty() {
            return Ok(vec![]);
        }
        let res = FindBooksByAuthorCommand::new(&self.library)
            .execute(FindBooksByAuthorCommandRequest::new(author))?;
        if res.books.is_empty() {
            return Err((Severity::NotFound, NO_BOOKS_BY_AUTHOR.to_string()));
        }
        Ok(listing(format!("Books by {}:", author), res.books))
    }

    pub fn inventory(&self) -> Result<Vec<String>, ControllerError> {
        let res = ListBooksCommand::new(&self.library).execute(ListBooksCommandRequest::default())?;
        Ok(listing("Available Books:".to_string(), res.books))
    }
}

fn listing(header: String, books: Vec<BookDto>) -> Vec<String> {
    std::iter::once(header)
        .chain(books.into_iter().map(|book| book.summary))
        .collect()
}
