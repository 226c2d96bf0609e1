use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::Library;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library.return_book(req.isbn.as_str())?;
        let book = self.library.find_book_by_isbn(req.isbn.as_str())?;
        Ok(ReturnBookCommandResponse { book: BookDto::from(book) })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory::create_library;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_return_book() {
        let mut library = create_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        library.add_book(BookEntity::new("1984", "Orwell", "isbn1").expect("should build book")).expect("should add book");
        library.lend_book("isbn1").expect("should lend book");

        let mut cmd = ReturnBookCommand::new(&mut library);
        let res = cmd.execute(ReturnBookCommandRequest::new("isbn1")).expect("should return book");
        assert_eq!(BookStatus::Available, res.book.book_status);
        assert_eq!(2, res.book.version);

        let again = cmd.execute(ReturnBookCommandRequest::new("isbn1"));
        assert!(matches!(again, Err(CommandError::NotAvailable{ .. })));
    }

    #[test]
    fn test_should_fail_returning_unknown_book() {
        let mut library = create_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = ReturnBookCommand::new(&mut library).execute(ReturnBookCommandRequest::new("nope"));
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
