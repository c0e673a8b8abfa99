//! Derived slices of the network: keyword domains and crisis upstream chains.

pub mod crisis;
pub mod domain;
