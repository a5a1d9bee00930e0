pub mod config;
pub mod error;
pub mod options;
pub mod paths;
pub mod template_id;
pub mod validation;

pub use config::{NginxConfig, SslEntry};
pub use error::AppError;
pub use options::{GenerateOptions, Options};
pub use template_id::TemplateId;
