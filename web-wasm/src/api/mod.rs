pub mod auth;
pub mod rpc;
pub mod ticker;
