// Library exports for testing
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
