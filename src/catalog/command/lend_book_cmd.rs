use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::Library;
use crate::core::command::{Command, CommandError};

pub struct LendBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> LendBookCommand<'a> {
    pub fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LendBookCommandRequest {
    pub isbn: String,
}

impl LendBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LendBookCommandResponse {
    pub book: BookDto,
}

impl Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand<'_> {
    fn execute(&mut self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        self.library.lend_book(req.isbn.as_str())?;
        let book = self.library.find_book_by_isbn(req.isbn.as_str())?;
        Ok(LendBookCommandResponse { book: BookDto::from(book) })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
    use crate::catalog::factory::create_library;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_lend_book() {
        let mut library = create_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        AddBookCommand::new(&mut library)
            .execute(AddBookCommandRequest::new("1984", "Orwell", "isbn1")).expect("should add book");

        let mut cmd = LendBookCommand::new(&mut library);
        let res = cmd.execute(LendBookCommandRequest::new("isbn1")).expect("should lend book");
        assert_eq!(BookStatus::CheckedOut, res.book.book_status);
        assert!(res.book.summary.ends_with("Checked out"));

        let again = cmd.execute(LendBookCommandRequest::new("isbn1"));
        assert!(matches!(again, Err(CommandError::NotAvailable{ .. })));
    }

    #[test]
    fn test_should_fail_lending_unknown_book() {
        let mut library = create_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = LendBookCommand::new(&mut library).execute(LendBookCommandRequest::new("nope"));
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
