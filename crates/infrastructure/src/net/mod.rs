pub mod locally_served;

pub use locally_served::LocallyServedNetworks;
