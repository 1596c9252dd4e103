pub mod auth;
pub mod social;
