//! Fundamental types for the scrutin voting-session manager.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: currently the opaque voter address.

pub mod address;

pub use address::VoterAddress;
