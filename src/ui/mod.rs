//! Terminal interface: content parsing, themes, rendering, and the
//! interactive chat loop.

pub mod chat_loop;
pub mod content;
pub mod render;
pub mod theme;
