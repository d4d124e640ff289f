//! Domain models shared by command handlers and the Discord transport layer.
//!
//! - `context` - the per-invocation input of a handler
//! - `embed` - the reply a handler produces
//! - `faq` - entries of the FAQ file
//! - `system` - raw readings returned by system info providers

pub mod context;
pub mod embed;
pub mod faq;
pub mod system;
