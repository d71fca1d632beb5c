pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use forwarding::{make_query, MessageBuilder, ResponseParser};
pub use resolver::DohResolver;
pub use transport::{
    send_doh_msg, send_doh_msg_with, HttpExchange, HttpRequestSpec, ReqwestExchange, Scheme,
};
