pub mod admin;
pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod web;

pub use error::{Result, ServerError};
