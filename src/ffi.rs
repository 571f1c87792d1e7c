//! C ABI
//!
//! Flat, unmangled entry points for the host application. Handles are raw
//! `NSWindow *` / `NSView *` pointers owned by the host; every function
//! borrows them for the duration of the call only.
//!
//! Nothing is signalled back across the boundary. A null handle or a call
//! made off the main thread is logged and ignored, and capability
//! mismatches are silent no-ops.

#![allow(non_snake_case)]

use std::ffi::{c_float, c_int, c_void};

use log::warn;
use objc2_app_kit::{NSView, NSWindow};
use objc2_foundation::MainThreadMarker;

use crate::bridge;
use crate::handle::{self, HandleError, HandleKind};
use crate::logging;

/// Borrow a handle, refusing null pointers and non-main threads
unsafe fn resolve<'a, T>(ptr: *mut c_void, kind: HandleKind, call: &str) -> Option<&'a T> {
    let result = match MainThreadMarker::new() {
        Some(_) => unsafe { handle::borrow(ptr, kind) },
        None => Err(HandleError::NotMainThread),
    };

    match result {
        Ok(object) => Some(object),
        Err(e) => {
            warn!("{} ignored: {}", call, e);
            None
        }
    }
}

/// Make the window's title bar transparent and extend the content view
/// under it.
///
/// # Safety
///
/// `window` must be null or point to a live `NSWindow`. Must be called on
/// the main thread, with no other access to the window in flight.
#[no_mangle]
pub unsafe extern "C" fn setTitleBarTransparent(window: *mut c_void) {
    if let Some(window) =
        unsafe { resolve::<NSWindow>(window, HandleKind::Window, "setTitleBarTransparent") }
    {
        bridge::set_titlebar_transparent(window);
    }
}

/// Make the window non-opaque with a clear background, and clear the layer
/// of its content view when that view is an `MTKView`.
///
/// # Safety
///
/// Same contract as [`setTitleBarTransparent`].
#[no_mangle]
pub unsafe extern "C" fn setWindowTransparent(window: *mut c_void) {
    if let Some(window) =
        unsafe { resolve::<NSWindow>(window, HandleKind::Window, "setWindowTransparent") }
    {
        bridge::set_window_transparent(window);
    }
}

/// Set the maximum drawable count of the view's `CAMetalLayer`. No-op when
/// the view is not backed by one.
///
/// # Safety
///
/// `view` must be null or point to a live `NSView`. Must be called on the
/// main thread.
#[no_mangle]
pub unsafe extern "C" fn setMaximumDrawableCount(view: *mut c_void, count: c_int) {
    if let Some(view) =
        unsafe { resolve::<NSView>(view, HandleKind::View, "setMaximumDrawableCount") }
    {
        // Forwarded unvalidated; negative counts wrap like an NSUInteger would
        bridge::set_maximum_drawable_count(view, count as usize);
    }
}

/// Toggle display sync on the view's `CAMetalLayer`. No-op when the view is
/// not backed by one.
///
/// # Safety
///
/// Same contract as [`setMaximumDrawableCount`].
#[no_mangle]
pub unsafe extern "C" fn setSyncEnabled(view: *mut c_void, enabled: bool) {
    if let Some(view) =
        unsafe { resolve::<NSView>(view, HandleKind::View, "setSyncEnabled") }
    {
        bridge::set_sync_enabled(view, enabled);
    }
}

/// Backing scale factor of the view's window, or `1.0` when the view is
/// not in a window.
///
/// # Safety
///
/// Same contract as [`setMaximumDrawableCount`].
#[no_mangle]
pub unsafe extern "C" fn getContentScaleFactor(view: *mut c_void) -> c_float {
    let view = unsafe { resolve::<NSView>(view, HandleKind::View, "getContentScaleFactor") };
    match view {
        Some(view) => bridge::get_content_scale_factor(view),
        None => bridge::DEFAULT_SCALE_FACTOR,
    }
}

/// Install the crate's `env_logger` backend. Safe to call more than once.
#[no_mangle]
pub extern "C" fn initAppKitExtensionsLogging() {
    logging::init();
}
