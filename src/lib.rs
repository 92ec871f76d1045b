pub mod config;
pub mod entities;
pub mod error;
pub mod infrastructure;
pub mod schema;
pub mod services;

pub use config::DbSettings;
pub use entities::UploadedFile;
pub use error::{ConfigError, StoreError};
pub use services::file_store::FileStore;
