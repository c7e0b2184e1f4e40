// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the Rumo intent router.
//!
//! This crate holds the closed category enumeration, the reasoning-effort
//! levels, and the [`RouteDecision`] value that the routing engine hands back
//! to its caller. It deliberately contains no logic beyond string
//! conversions so that every other crate in the workspace can depend on it
//! without pulling in the matching machinery.

pub mod types;

pub use types::{Category, ReasoningEffort, RouteDecision};
