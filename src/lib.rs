//! In-memory book catalog for a single library branch.
//!
//! The catalog owns physical books and eBooks keyed by ISBN, tracks whether each one is
//! lent out, and publishes a domain event for every change it accepts. Presentation layers
//! talk to it either directly through [`catalog::domain::Library`] or through the
//! request/response commands under [`catalog::command`].

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod books;
pub mod catalog;
pub mod gateway;

pub mod utils {
    pub mod date;
    pub mod logs;
}
