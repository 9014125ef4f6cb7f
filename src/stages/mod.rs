pub mod config;
pub mod environment;
pub mod identity;
pub mod package;
pub mod platform;
pub mod preflight;
pub mod registrar;
pub mod runtime;
pub mod service;
pub mod summary;
