//! # Gas Tracking Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (keeper hot paths)
//! └── src/integration/  # Multi-block flows through the public API
//!     ├── block_lifecycle.rs
//!     └── leftover_rewards.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gas-tracking-tests
//! cargo test -p gas-tracking-tests integration::leftover_rewards
//!
//! # Benchmarks
//! cargo bench -p gas-tracking-tests
//! ```

#![allow(dead_code)]

pub mod integration;
