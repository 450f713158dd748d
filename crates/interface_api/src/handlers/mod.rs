//! Request handlers

pub mod composite;
pub mod health;
