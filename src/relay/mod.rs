pub mod handler;
pub mod ledger;

pub use handler::{function_handler, relay_change};
