//! Paste email or notes text, send it to a summarization service, and show
//! the summary with its top action items.

pub mod client;
pub mod config;
pub mod headless;
pub mod logging;
pub mod ui;
