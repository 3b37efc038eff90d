//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Provider fault model (stable `{code, message}` failures)
//! - Environment-backed provider configuration
//! - Password hashing (Argon2id) and password policy
//! - Document database contract and an in-memory implementation

pub mod config;
pub mod document;
pub mod fault;
pub mod memory;
pub mod password;
