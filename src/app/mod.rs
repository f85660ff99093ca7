// BasketMiner - app/mod.rs
//
// Application layer: orchestration and state management.
// Dependencies: core layer, validated config values.
// Must NOT depend on: ui, platform specifics.

pub mod analysis;
pub mod state;
