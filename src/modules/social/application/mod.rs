pub mod domain;
pub mod ports;
pub mod service;
pub mod social_use_cases;
