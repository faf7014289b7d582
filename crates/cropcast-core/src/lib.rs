pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ChatConfig, CropcastConfig, GeneralConfig};
pub use error::{CropcastError, Result};
pub use types::*;
