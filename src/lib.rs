//! AppKit extensions - window and view tweaks for native hosts
//!
//! A handful of AppKit/MetalKit property setters exported through a flat C
//! ABI, for applications that drive Cocoa from C++ (metal-cpp) and hold
//! their windows and views as raw pointers.
//!
//! # Architecture
//!
//! - **Host Layer**: Capability traits describing the window, view and layer
//!   operations the bridge needs
//! - **Bridge**: The operations themselves, generic over the host traits
//! - **Cocoa Backend**: Host trait implementations for NSWindow, NSView,
//!   CALayer and CAMetalLayer
//! - **FFI**: Unmangled `extern "C"` entry points (macOS only)
//!
//! # Example
//!
//! ```c
//! #include "appkit_extensions.h"
//!
//! setTitleBarTransparent(window);
//! setMaximumDrawableCount(view, 3);
//! float scale = getContentScaleFactor(view);
//! ```

pub mod backend;
pub mod bridge;
pub mod handle;
pub mod host;
pub mod logging;

#[cfg(target_os = "macos")]
pub mod ffi;
