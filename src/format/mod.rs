//! Formatting helpers for log and header display.

mod address;

pub use address::{format_ipv4, format_mac};
