//! HTTP request handlers

pub mod crags;
pub mod forecast;
pub mod health;
