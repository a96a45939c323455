//! Queue, history and snapshot engine behind a single theme-park ride.
//!
//! Visitors wait in a [`park::Queue`], [`park::Ride::run_one_cycle`] seats up to
//! the ride's capacity and records them in a duplicate-free [`park::History`],
//! and [`park::store`] snapshots that history to a flat file and back.

pub mod config;
pub mod error;
pub mod park;
pub mod people;
