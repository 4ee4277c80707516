//! Catalog CLI library interface for integration tests

#![allow(clippy::needless_pass_by_value)]

pub mod add;
pub mod cli;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod output;
pub mod update;
