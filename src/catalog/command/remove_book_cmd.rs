use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::Library;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

// `removed` is None when the isbn was not in the catalog.
#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: Option<BookDto>,
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.library.remove_book(req.isbn.as_str())
            .map_err(CommandError::from)
            .map(|removed| RemoveBookCommandResponse { removed: removed.as_ref().map(BookDto::from) })
    }
}
