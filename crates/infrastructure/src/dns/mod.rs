pub mod exchange;
pub mod local_resolvers;
pub mod upstream;

pub use exchange::UdpExchanger;
pub use local_resolvers::LocalResolverSet;
pub use upstream::UpstreamResolver;
