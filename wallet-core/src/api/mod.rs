// wallet-core/src/api/mod.rs

//! Presentation boundary facade.
//!
//! One call per user action: create a fresh address, or restore one from an
//! existing phrase. Callers (CLI, FFI bridge, UI) only format the result.

pub mod address;

pub use address::{create_address, restore_address, AddressBundle};
