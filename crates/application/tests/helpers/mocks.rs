#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, PTR};
use hickory_proto::rr::{Name, RData, Record};
use rdns_application::ports::{ClientRegistry, DnsExchanger, NetworkClassifier};
use rdns_domain::{ClientSource, DomainError};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};

#[derive(Clone)]
pub enum ExchangeBehavior {
    /// Answer with a PTR record pointing at this target.
    Ptr(String),
    /// NoError response with an empty answer section.
    Empty,
    /// First answer is an A record instead of a PTR.
    WrongType,
    /// Scripted exchange failure.
    Fail,
    /// Panic inside the exchange.
    Panic,
    /// Never complete.
    Hang,
}

pub struct MockExchanger {
    behavior: RwLock<ExchangeBehavior>,
    calls: AtomicU64,
}

impl MockExchanger {
    pub fn new(behavior: ExchangeBehavior) -> Self {
        Self {
            behavior: RwLock::new(behavior),
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub async fn set_behavior(&self, behavior: ExchangeBehavior) {
        *self.behavior.write().await = behavior;
    }
}

#[async_trait]
impl DnsExchanger for MockExchanger {
    async fn exchange(&self, query: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let behavior = self.behavior.read().await.clone();

        match behavior {
            ExchangeBehavior::Ptr(target) => Ok(ptr_response(query, &target)),
            ExchangeBehavior::Empty => Ok(response_without_answers(query)),
            ExchangeBehavior::WrongType => Ok(a_response(query)),
            ExchangeBehavior::Fail => Err(DomainError::ExchangeFailed {
                server: "mock".into(),
                reason: "scripted failure".into(),
            }),
            ExchangeBehavior::Panic => panic!("scripted exchanger panic"),
            ExchangeBehavior::Hang => {
                futures::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

fn response_without_answers(query: &Message) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    for q in query.queries() {
        response.add_query(q.clone());
    }
    response
}

fn queried_name(query: &Message) -> Name {
    query
        .queries()
        .first()
        .map(|q| q.name().clone())
        .unwrap_or_else(Name::root)
}

pub fn ptr_response(query: &Message, target: &str) -> Message {
    let mut response = response_without_answers(query);
    let rdata = RData::PTR(PTR(Name::from_str(target).unwrap()));
    response.add_answer(Record::from_rdata(queried_name(query), 300, rdata));
    response
}

fn a_response(query: &Message) -> Message {
    let mut response = response_without_answers(query);
    let rdata = RData::A(A(Ipv4Addr::new(192, 0, 2, 1)));
    response.add_answer(Record::from_rdata(queried_name(query), 300, rdata));
    response
}

pub struct MockRegistry {
    existing: RwLock<HashMap<IpAddr, ClientSource>>,
    added: Mutex<Vec<(IpAddr, String, ClientSource)>>,
    fail_add: AtomicBool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            existing: RwLock::new(HashMap::new()),
            added: Mutex::new(Vec::new()),
            fail_add: AtomicBool::new(false),
        }
    }

    pub async fn with_existing(entries: Vec<(&str, ClientSource)>) -> Self {
        let registry = Self::new();
        {
            let mut existing = registry.existing.write().await;
            for (ip, source) in entries {
                existing.insert(ip.parse().unwrap(), source);
            }
        }
        registry
    }

    pub fn set_fail_add(&self, fail: bool) {
        self.fail_add.store(fail, Ordering::Relaxed);
    }

    pub fn added(&self) -> Vec<(IpAddr, String, ClientSource)> {
        self.added.lock().unwrap().clone()
    }

    pub fn hostname_for(&self, ip: &str) -> Option<String> {
        let ip: IpAddr = ip.parse().unwrap();
        self.added
            .lock()
            .unwrap()
            .iter()
            .find(|(added_ip, _, _)| *added_ip == ip)
            .map(|(_, host, _)| host.clone())
    }
}

#[async_trait]
impl ClientRegistry for MockRegistry {
    async fn exists(&self, ip: IpAddr, source: ClientSource) -> bool {
        self.existing
            .read()
            .await
            .get(&ip)
            .is_some_and(|s| *s >= source)
    }

    async fn add_host(
        &self,
        ip: IpAddr,
        hostname: &str,
        source: ClientSource,
    ) -> Result<bool, DomainError> {
        if self.fail_add.load(Ordering::Relaxed) {
            return Err(DomainError::RegistryError("scripted failure".into()));
        }
        self.added
            .lock()
            .unwrap()
            .push((ip, hostname.to_string(), source));
        Ok(true)
    }
}

pub struct FixedClassifier {
    local: bool,
}

impl FixedClassifier {
    pub fn local() -> Self {
        Self { local: true }
    }

    pub fn public() -> Self {
        Self { local: false }
    }
}

impl NetworkClassifier for FixedClassifier {
    fn is_locally_served(&self, _ip: IpAddr) -> bool {
        self.local
    }
}

/// Poll a condition for up to a second; background resolution is
/// asynchronous, so assertions on its side effects need a bounded wait.
pub async fn wait_for(condition: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        sleep(Duration::from_millis(10)).await;
    }
    false
}
