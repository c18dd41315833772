pub mod ptr_query;
pub mod reverse_resolver;

pub use reverse_resolver::ReverseResolver;
