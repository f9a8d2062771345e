// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width; portrait layout sized for the 350px artwork frame.
pub const DEFAULT_WINDOW_WIDTH: u32 = 480;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 860;

/// Minimum window width accepted from the config file.
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Minimum window height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS yield a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
