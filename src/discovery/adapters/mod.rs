//! Adapter implementations for the agent discovery ports.

pub mod memory;
