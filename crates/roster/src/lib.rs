//! Roster - employee records administration.
//!
//! This crate provides both a CLI application and a library holding an
//! in-memory employee collection with search, sorting and pagination.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod seed;
pub mod storage;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;

// Command implementations
pub mod commands;

// Terminal and JSON rendering
pub mod output;
