mod auth_api_port;

pub use auth_api_port::AuthApiPort;
