pub mod config;
pub mod error;
pub mod loyalty;
pub mod promotions;

pub use config::AppConfig;
pub use error::{RestoError, RestoResult};
