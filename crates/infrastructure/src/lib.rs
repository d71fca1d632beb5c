//! Ferrous DoH Infrastructure Layer
pub mod dns;

pub use dns::{make_query, send_doh_msg, send_doh_msg_with, DohResolver, HttpExchange};
