use thiserror::Error;

pub mod client_config;


pub use client_config::{ClientConfig, InputFormat};

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}
