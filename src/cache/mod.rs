pub mod expiring;
pub mod token_manager;

pub use expiring::ExpiringValue;
pub use token_manager::TokenManager;
