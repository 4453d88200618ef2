mod blocks;
pub mod helpers;
mod inline;
mod streaming;
