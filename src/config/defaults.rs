// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Default time a toast stays visible before dismissing itself (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 1.2;

/// Duration value that disables auto-dismiss.
pub const DISABLED_DURATION_SECS: f64 = 0.0;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Whether tapping a toast dismisses it by default.
pub const DEFAULT_TAP_TO_DISMISS: bool = true;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Extra vertical offset applied to top-drop toasts (in logical pixels).
pub const DEFAULT_OFFSET_Y: f32 = 0.0;

/// Scale a centered toast grows from when it appears.
pub const CENTERED_ENTRY_SCALE: f32 = 0.8;
