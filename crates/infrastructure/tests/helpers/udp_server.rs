#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::PTR;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::UdpSocket;

/// Spawn a loopback DNS server answering PTR queries for `zone` with
/// `target`. Queries for other names get a NoError/empty-answer response.
pub async fn spawn_ptr_responder(zone: &'static str, target: &'static str) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(query) = Message::from_vec(&buf[..len]) else {
                continue;
            };

            let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
            for q in query.queries() {
                response.add_query(q.clone());
            }

            if let Some(q) = query.queries().first() {
                if q.name().to_utf8().eq_ignore_ascii_case(zone) {
                    let rdata = RData::PTR(PTR(Name::from_str(target).unwrap()));
                    response.add_answer(Record::from_rdata(q.name().clone(), 300, rdata));
                }
            }

            let mut bytes = Vec::with_capacity(512);
            let mut encoder = BinEncoder::new(&mut bytes);
            if response.emit(&mut encoder).is_ok() {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });

    addr
}

/// Spawn a server that reads queries and never answers.
pub async fn spawn_silent_responder() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        while socket.recv_from(&mut buf).await.is_ok() {}
    });

    addr
}
