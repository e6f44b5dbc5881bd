pub mod cli;
pub mod commands;
pub mod config;
pub mod depository;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod message;
pub mod nonce;
pub mod query;
pub mod submission;
pub mod wallet;
