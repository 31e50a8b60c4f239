// ABOUTME: Wire-shaped data records for the PulseFit schedule resolver
// ABOUTME: Re-exports AvailabilityWindow and GroupSession with their serde field mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

//! # Data Models
//!
//! Records as the REST collaborator delivers them. Both types are read-only
//! snapshots: the resolver never mutates them and every derived value is
//! recomputed per call.
//!
//! ## Design Principles
//!
//! - **Untrusted input**: every field is optional or defaulted; malformed
//!   values degrade to "no data", never to a panic
//! - **Alias tolerant**: the branch and coach endpoints name the same
//!   concepts differently (`opening_hour` vs `start_time`); one record type
//!   absorbs both spellings
//! - **Serializable**: all models round-trip through JSON for the screens'
//!   view-state caches

mod availability;
mod session;

pub use availability::AvailabilityWindow;
pub use session::GroupSession;
