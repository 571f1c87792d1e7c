//! Raw handle conversion
//!
//! The host passes window and view objects as untyped pointers. They are
//! borrowed for the duration of a single call and never retained or freed.

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

/// What kind of object a handle is expected to point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Window,
    View,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Window => f.write_str("window"),
            HandleKind::View => f.write_str("view"),
        }
    }
}

/// A handle that cannot be used for this call
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("Null {0} handle")]
    Null(HandleKind),
    #[error("Called off the main thread")]
    NotMainThread,
}

/// Borrow the object behind a raw handle
///
/// # Safety
///
/// `ptr` must be null or point to a live `T` that stays valid, and is not
/// mutated through another path in a way Rust can observe, for `'a`.
pub unsafe fn borrow<'a, T>(ptr: *mut c_void, kind: HandleKind) -> Result<&'a T, HandleError> {
    let ptr = NonNull::new(ptr.cast::<T>()).ok_or(HandleError::Null(kind))?;
    Ok(unsafe { ptr.as_ref() })
}
