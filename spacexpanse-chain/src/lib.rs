//! Core SpaceXpanse data structures and per-network chain parameters.
//!
//! This crate provides:
//! - the four network variants and their frozen [`parameters::ChainParams`],
//! - deterministic construction of each network's genesis block,
//! - the proof-of-work data carried by block headers, and
//! - the combined target spacing of the two mining algorithms.

#![doc(html_root_url = "https://docs.rs/spacexpanse_chain")]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod parameters;
pub mod serialization;
pub mod transaction;
pub mod transparent;
pub mod work;
