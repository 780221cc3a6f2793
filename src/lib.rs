pub mod catalog;
pub mod cli;
pub mod contact;
pub mod error;
pub mod feed;
pub mod github;
pub mod models;
pub mod notify;
pub mod server;
pub mod types;
