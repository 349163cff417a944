pub mod access_token;
pub mod http_client;
pub mod scenes_client;
