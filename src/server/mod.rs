//! Quiz server module.
//!
//! Hosts independent quiz sessions over WebSocket, one per connection.

mod handler;
mod server;

pub use handler::handle_message;
pub use server::run;
