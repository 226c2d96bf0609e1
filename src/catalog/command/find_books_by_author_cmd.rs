use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::Library;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand<'a> {
    library: &'a Library,
}

impl<'a> FindBooksByAuthorCommand<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindBooksByAuthorCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand<'_> {
    fn execute(&mut self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        let books = self.library.books_by_author(req.author.as_str()).map(BookDto::from).collect();
        Ok(FindBooksByAuthorCommandResponse { books })
    }
}
