// wallet-core/src/chains/mod.rs
pub mod evm;

pub use evm::EvmAddress;
