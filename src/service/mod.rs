//! Data providers used by command handlers.
//!
//! - `faq` - lookups in the YAML FAQ file
//! - `system` - operating system, memory, uptime and sensor readings

pub mod faq;
pub mod system;

#[cfg(test)]
mod test;
