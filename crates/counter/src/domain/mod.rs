//! Domain Layer - Counter records and the store contract
//!
//! This layer contains:
//! - Domain entities (CounterRecord)
//! - Store trait (interface, implemented in infrastructure)

pub mod entities;
pub mod repository;
