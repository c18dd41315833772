pub mod memory;

pub use memory::InMemoryClientRegistry;
