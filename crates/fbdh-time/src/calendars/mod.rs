//! Concrete calendar implementations.

pub mod france;
