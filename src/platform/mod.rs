// BasketMiner - platform/mod.rs
//
// Platform abstraction layer: configuration directories and config.toml.

pub mod config;
