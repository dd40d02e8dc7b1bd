pub mod auth;
pub mod backend;
pub mod config;
pub mod error;

pub use auth::AuthSession;
pub use backend::Backend;
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
