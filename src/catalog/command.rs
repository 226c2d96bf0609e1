pub mod add_book_cmd;
pub mod find_books_by_author_cmd;
pub mod lend_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod return_book_cmd;
