//! fhevm-tutor is a terminal-first AI tutor for the Zama FHEVM platform.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation model: transcript and session state,
//!   personas and learning paths, preferences, and streaming orchestration.
//! - [`ui`] parses model replies into typed content blocks, renders them to
//!   terminal lines, and runs the interactive event loop.
//! - [`api`] defines the wire payloads for the OpenAI-compatible chat
//!   completions endpoint.
//! - [`utils`] carries URL helpers and the syntect highlighting shim.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which wires configuration and the HTTP
//! backend into [`ui::chat_loop`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
