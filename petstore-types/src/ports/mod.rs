//! Port traits implemented by the outbound adapters.

mod catalog;
mod gateway;

pub use catalog::ProductCatalog;
pub use gateway::PaymentGateway;
