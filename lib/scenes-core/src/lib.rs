//! Client library for the Scenes REST API.
//!
//! Scene object content is typed per (kind, version) through [`schema`], decoded
//! responses are checked by the guards in [`validator`] before they are trusted,
//! and [`provider::scenes_client`] maps the remote operations onto both.

pub mod config;
pub mod model;
pub mod provider;
pub mod schema;
pub mod validator;
