//! sqlrelay - applies a SQL migration file to a remote database over its HTTP RPC endpoint.
//!
//! This library exposes the core modules for use in integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod runner;
pub mod statements;
