//! Window and view property bridge
//!
//! Each operation takes a borrowed host object, mutates or queries a fixed
//! set of display properties, and returns. Nothing is retained between
//! calls. Objects that lack a capability (a content view that is not a
//! graphics surface, a layer that does not present through Metal) are left
//! alone; the operation reports [`Outcome::Skipped`] instead of failing.

use log::{debug, warn};

use crate::host::{MetalLayer, NativeLayer, NativeView, NativeWindow, StyleMask};

/// Scale factor reported for a view that is not in a window
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Drawable counts CAMetalLayer is documented to accept
const CONVENTIONAL_DRAWABLE_COUNTS: std::ops::RangeInclusive<usize> = 2..=3;

/// Why an operation left an object untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityMismatch {
    #[error("Content view is not a graphics surface view")]
    NotSurfaceView,
    #[error("View has no backing layer")]
    NoLayer,
    #[error("Backing layer does not present through Metal")]
    NotMetalLayer,
}

/// Result of a setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested property was written
    Applied,
    /// The optional part of the operation did not apply to this object
    Skipped(CapabilityMismatch),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Make the title bar transparent and let the content view extend under it
pub fn set_titlebar_transparent<W: NativeWindow>(window: &W) -> Outcome {
    window.set_titlebar_appears_transparent(true);
    window.set_style_mask(window.style_mask() | StyleMask::FULL_SIZE_CONTENT_VIEW);

    debug!("Title bar set transparent");
    Outcome::Applied
}

/// Make the window see-through
///
/// The window itself always becomes non-opaque with a clear background.
/// When its content view is a graphics surface, the view is made
/// layer-backed and its layer is cleared to match.
pub fn set_window_transparent<W: NativeWindow>(window: &W) -> Outcome {
    window.set_opaque(false);
    window.set_clear_background();

    let Some(view) = window.surface_content_view() else {
        debug!("Window set transparent, content view left as is");
        return Outcome::Skipped(CapabilityMismatch::NotSurfaceView);
    };

    view.set_wants_layer(true);
    if let Some(layer) = view.backing_layer() {
        layer.set_opaque(false);
        layer.set_clear_background();
    }

    debug!("Window and content view set transparent");
    Outcome::Applied
}

/// Set how many drawables the view's Metal layer may have in flight
///
/// `count` is forwarded unchanged; out-of-range values are left to the
/// compositor.
pub fn set_maximum_drawable_count<V: NativeView>(view: &V, count: usize) -> Outcome {
    let layer = match metal_layer(view) {
        Ok(layer) => layer,
        Err(mismatch) => {
            debug!("Drawable count not set: {}", mismatch);
            return Outcome::Skipped(mismatch);
        }
    };

    if !CONVENTIONAL_DRAWABLE_COUNTS.contains(&count) {
        warn!("Unusual maximum drawable count {}, forwarding anyway", count);
    }

    layer.set_maximum_drawable_count(count);
    debug!("Maximum drawable count set to {}", count);
    Outcome::Applied
}

/// Toggle vsync-gated presentation on the view's Metal layer
pub fn set_sync_enabled<V: NativeView>(view: &V, enabled: bool) -> Outcome {
    let layer = match metal_layer(view) {
        Ok(layer) => layer,
        Err(mismatch) => {
            debug!("Display sync not set: {}", mismatch);
            return Outcome::Skipped(mismatch);
        }
    };

    layer.set_display_sync_enabled(enabled);
    debug!("Display sync enabled: {}", enabled);
    Outcome::Applied
}

/// Backing scale factor of the view's window, or [`DEFAULT_SCALE_FACTOR`]
/// when the view is not in a window
pub fn get_content_scale_factor<V: NativeView>(view: &V) -> f32 {
    match view.window() {
        Some(window) => window.backing_scale_factor() as f32,
        None => DEFAULT_SCALE_FACTOR,
    }
}

fn metal_layer<V: NativeView>(view: &V) -> Result<V::MetalLayer, CapabilityMismatch> {
    view.backing_layer()
        .ok_or(CapabilityMismatch::NoLayer)?
        .metal()
        .ok_or(CapabilityMismatch::NotMetalLayer)
}
