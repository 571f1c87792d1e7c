//! Backend module
//!
//! This module contains platform-specific implementations of the host
//! capability traits:
//! - Cocoa backend for macOS (NSWindow, NSView, CAMetalLayer)

#[cfg(target_os = "macos")]
pub mod cocoa;
