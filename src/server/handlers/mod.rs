// src/server/handlers/mod.rs
//! HTTP request handlers for the gusteau server

pub mod entries;
pub mod parse;
pub mod summary;
