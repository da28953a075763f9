//! Aggregate roots - domain objects that own their related data
//!
//! The attribute engine is the only aggregate. It:
//! - Owns the registered cost systems and the attribute values
//! - Exposes behavior through methods, never public fields
//! - Returns outcomes from mutations and notifies subscribed observers

pub mod attribute_engine;

pub use attribute_engine::AttributeEngine;
