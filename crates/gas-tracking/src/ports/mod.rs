//! # Ports Layer
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving port (`GasTrackingApi`)
//! - `outbound.rs` - Driven ports (`KeyValueStore`, `RecordCodec`)

pub mod inbound;
pub mod outbound;
