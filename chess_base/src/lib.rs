//! # Base types for tchess
//!
//! This is an auxiliary crate for `tchess`, which contains the piece catalog, cell coordinates
//! and the stepping geometry shared by the board and the legality rules.
//!
//! Normally you don't want to use this crate directly. Use `tchess` instead, which re-exports
//! everything declared here.

pub mod geometry;
pub mod types;
