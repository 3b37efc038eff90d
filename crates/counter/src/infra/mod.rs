//! Infrastructure Layer

pub mod document;

pub use document::DocumentCounterStore;
