//! Advent of Code puzzle units with automatic registration
//!
//! Each unit derives `AutoRegisterSolver`, so linking this crate is enough
//! for `RegistryBuilder::register_all_plugins` to find it.

#[cfg(feature = "year-2018")]
pub mod solutions;
