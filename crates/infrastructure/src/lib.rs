//! rDNS Infrastructure Layer
pub mod dns;
pub mod net;
pub mod registry;
