//! Domain layer: transcript state, personas, learning paths, configuration,
//! key material, and the streaming transport. The UI renders what lives here
//! and never the other way around.

pub mod chat_stream;
pub mod config;
pub mod keys;
pub mod learning;
pub mod message;
pub mod persona;
pub mod session;
