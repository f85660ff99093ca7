// BasketMiner - ui/panels/mod.rs

pub mod about;
pub mod itemsets;
pub mod parameters;
pub mod rules;
pub mod summary;
