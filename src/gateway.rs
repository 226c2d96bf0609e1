pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

// Where catalog events are delivered.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
