// BasketMiner - core/mod.rs
//
// Core business logic layer: loading, transaction building, mining, export.
// Must NOT depend on: ui, platform, app.

pub mod apriori;
pub mod encoder;
pub mod export;
pub mod loader;
pub mod miner;
pub mod model;
pub mod rules;
pub mod transactions;
