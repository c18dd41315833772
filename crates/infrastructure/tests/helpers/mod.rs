mod udp_server;

pub use udp_server::*;
