//! Extension discovery and activation.
//!
//! The pipeline is strictly linear: `discovery` instantiates every
//! registered extension, `validation` drops the ones unsafe to activate and
//! `filter` keeps the ones the operator enabled. Each stage consumes its
//! input sequence and returns a new one.

pub mod contract;
pub mod discovery;
pub mod filter;
pub mod pipeline;
pub mod registry;
pub mod validation;
