pub mod token_config;
