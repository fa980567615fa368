//! Raw storage building blocks.
//!
//! This layer intentionally exposes no public surface and concentrates every
//! unsafe slot operation of the crate in one audited module.

pub(crate) mod access;
