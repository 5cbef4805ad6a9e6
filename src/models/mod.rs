//! Wire types mirrored 1:1 from the backend JSON shapes.
//!
//! Field names are camelCase on the wire; every type here is a plain data
//! carrier with no behavior beyond (de)serialization.

pub mod account;
pub mod auth;
pub mod common;
pub mod device;
pub mod func_model;
