#![allow(unused_imports)]
pub mod builders;
pub mod doh_server_mock;

pub use builders::{RecordingExchange, ResponseBuilder, EXAMPLE_ADDR, EXAMPLE_A_QUERY};
pub use doh_server_mock::{MockDohServer, ObservedRequest};
