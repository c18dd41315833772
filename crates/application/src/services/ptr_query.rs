//! PTR query construction.
//!
//! Builds the reverse-lookup name (`in-addr.arpa.` / `ip6.arpa.`) for an
//! address and wraps it in a recursive PTR query message.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use rdns_domain::DomainError;
use std::net::IpAddr;
use std::str::FromStr;

/// Reverse-lookup domain for an address, fully qualified.
pub fn reverse_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa.", nibbles.join("."))
        }
    }
}

/// Build a PTR query for the address with a fresh id and RD set.
pub fn build_ptr_query(ip: &IpAddr) -> Result<Message, DomainError> {
    let name = Name::from_str(&reverse_name(ip))
        .map_err(|e| DomainError::InvalidIpAddress(format!("reversing {ip}: {e}")))?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(RecordType::PTR);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    Ok(message)
}
