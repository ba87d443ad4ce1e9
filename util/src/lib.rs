pub mod challenge;
pub mod validation_config;
