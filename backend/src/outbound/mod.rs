//! Outbound adapters implementing the domain repository ports.
//!
//! Only in-memory adapters exist. They hold plain collections and contain no
//! business logic.

pub mod memory;
