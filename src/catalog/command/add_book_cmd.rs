use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, CatalogItem, EBookEntity};
use crate::books::dto::BookDto;
use crate::catalog::domain::Library;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

pub struct AddBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

// Raw form input; a download size marks the request as an eBook.
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub download_size: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            download_size: None,
        }
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, download_size: &str) -> Self {
        Self {
            download_size: Some(download_size.to_string()),
            ..Self::new(title, author, isbn)
        }
    }

    pub fn build_book(&self) -> LibraryResult<CatalogItem> {
        match &self.download_size {
            Some(size) => EBookEntity::parse(&self.title, &self.author, &self.isbn, size).map(CatalogItem::from),
            None => BookEntity::new(&self.title, &self.author, &self.isbn).map(CatalogItem::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        let dto = BookDto::from(&book);
        self.library.add_book(book)?;
        Ok(AddBookCommandResponse::new(dto))
    }
}
