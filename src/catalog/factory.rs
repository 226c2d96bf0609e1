use crate::catalog::domain::Library;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_library(config: &Configuration, via: GatewayPublisherVia) -> Library {
    let publisher = create_publisher(via);
    Library::new(config, publisher)
}
