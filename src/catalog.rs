pub mod command;
pub mod console;
pub mod controller;
pub mod domain;
pub mod factory;
