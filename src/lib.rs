// src/lib.rs

//! Gusteau Cookbook Service
//!
//! In-memory registry of named cookbook entries with recursive recipe
//! resolution.
//!
//! # Architecture
//!
//! - Canonical names: every identifier is normalized before any lookup,
//!   so store identity is defined over the canonical form
//! - Cookbook store: one immutable entry per canonical name, written
//!   only through the registration validator
//! - Resolver: recursive expansion with multiplicity propagation,
//!   fail-fast on missing references, cycle-guarded
//! - Server: axum boundary mapping the three operations to HTTP routes

pub mod cookbook;
pub mod name;
pub mod resolver;
pub mod server;

pub use cookbook::{Component, Cookbook, Entry, EntryRequest, RawComponent, RegisterError};
pub use name::{normalize, CanonicalName, InvalidName};
pub use resolver::{resolve, IngredientTotal, ResolveError, Summary};
pub use server::{create_router, run_server, ServerConfig, ServerState};
