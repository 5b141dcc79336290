/// Credential injection
pub mod auth;
/// Application configuration module
pub mod config;
/// Category operation interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Category operations implemented on the client
pub mod services;
