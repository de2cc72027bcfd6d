pub mod bootstrap;
pub mod client_config;
pub mod teams;
