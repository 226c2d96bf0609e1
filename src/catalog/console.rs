use crate::catalog::controller::CatalogController;
use crate::core::controller::ControllerError;

pub const HELP: &[&str] = &[
    "Commands (fields are separated by '|'):",
    "  add <title>|<author>|<isbn>",
    "  add-ebook <title>|<author>|<isbn>|<size in MB>",
    "  lend <isbn>",
    "  return <isbn>",
    "  remove <isbn>",
    "  author <name>",
    "  list",
    "  help",
    "  quit",
];

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleReply {
    Lines(Vec<String>),
    Quit,
}

// Runs one console line against the controller. Successful changes are followed by
// the full inventory, the same way the form redraws its listing.
pub fn dispatch(controller: &mut CatalogController, line: &str) -> ConsoleReply {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let outcome = match (verb, fields.as_slice()) {
        ("", _) => Ok(vec![]),
        ("quit" | "exit", _) => return ConsoleReply::Quit,
        ("help", _) => Ok(HELP.iter().map(|l| l.to_string()).collect()),
        ("list", _) => controller.inventory(),
        ("add", [title, author, isbn]) => {
            controller.add_book(title, author, isbn, None).map(Some).and_then(|msg| with_inventory(controller, msg))
        }
        ("add-ebook", [title, author, isbn, size]) => {
            controller.add_book(title, author, isbn, Some(*size)).map(Some).and_then(|msg| with_inventory(controller, msg))
        }
        ("lend", [isbn]) => controller.lend_book(isbn).and_then(|msg| with_inventory(controller, msg)),
        ("return", [isbn]) => controller.return_book(isbn).and_then(|msg| with_inventory(controller, msg)),
        ("remove", [isbn]) => controller.remove_book(isbn).and_then(|msg| with_inventory(controller, msg)),
        ("author", [name]) => controller.books_by_author(name),
        _ => Ok(vec![format!("unrecognized command '{}', type 'help' for usage", line)]),
    };
    match outcome {
        Ok(lines) => ConsoleReply::Lines(lines),
        Err((severity, message)) => ConsoleReply::Lines(vec![format!("{}: {}", severity.title(), message)]),
    }
}

fn with_inventory(controller: &CatalogController, message: Option<String>) -> Result<Vec<String>, ControllerError> {
    let Some(message) = message else {
        return Ok(vec![]);
    };
    let mut lines = vec![message];
    lines.extend(controller.inventory()?);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use crate::catalog::console::{ConsoleReply, dispatch};
    use crate::catalog::controller::CatalogController;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    fn lines(reply: ConsoleReply) -> Vec<String> {
        match reply {
            ConsoleReply::Lines(lines) => lines,
            ConsoleReply::Quit => panic!("unexpected quit"),
        }
    }

    fn build_controller() -> CatalogController {
        CatalogController::from_state(&AppState::new(Configuration::new("test"), GatewayPublisherVia::Memory))
    }

    #[test]
    fn test_should_add_and_redraw_inventory() {
        let mut controller = build_controller();
        let out = lines(dispatch(&mut controller, "add 1984 | Orwell | ISBN1"));
        assert_eq!(vec![
            "Book '1984' added to the library.".to_string(),
            "Available Books:".to_string(),
            "1984 by Orwell (ISBN: ISBN1) - Available".to_string(),
        ], out);
    }

    #[test]
    fn test_should_report_errors() {
        let mut controller = build_controller();
        lines(dispatch(&mut controller, "add-ebook Brave New World|Huxley|ISBN2|5.5"));
        let out = lines(dispatch(&mut controller, "return ISBN2"));
        assert_eq!(1, out.len());
        assert!(out[0].starts_with("Error: "));
        let out = lines(dispatch(&mut controller, "author Orwell"));
        assert_eq!(vec!["Not Found: No books by this author.".to_string()], out);
    }

    #[test]
    fn test_should_handle_usage() {
        let mut controller = build_controller();
        assert_eq!(ConsoleReply::Quit, dispatch(&mut controller, "quit"));
        assert!(lines(dispatch(&mut controller, "")).is_empty());
        assert!(lines(dispatch(&mut controller, "help"))[0].starts_with("Commands"));
        let out = lines(dispatch(&mut controller, "add only-a-title"));
        assert!(out[0].starts_with("unrecognized command"));
    }

    #[test]
    fn test_should_search_author_with_spaces() {
        let mut controller = build_controller();
        lines(dispatch(&mut controller, "add Dune|Frank Herbert|ISBN5"));
        let out = lines(dispatch(&mut controller, "author Frank Herbert"));
        assert_eq!(vec!["Books by Frank Herbert:".to_string(), "Dune by Frank Herbert (ISBN: ISBN5) - Available".to_string()], out);
    }
}
