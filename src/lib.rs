pub mod api;
pub mod config;
pub mod error;
pub mod gpa;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
