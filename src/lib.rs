//! crm-import CLI library

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod loader;
pub mod report;
pub mod rpc;
pub mod ticker;
