pub mod proc_loader;
pub mod proc_validator;
pub mod settings;
pub mod types;

pub use proc_loader::{file_to_config, parse_config};
pub use types::{ClientConfig, CredentialsConfig, SecretValue};
