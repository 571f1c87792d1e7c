//! Host capability interface
//!
//! The bridge never talks to AppKit directly. It sees the host toolkit
//! through the traits in this module:
//! - `NativeWindow` for a top-level window
//! - `NativeView` for a rendering view, optionally layer-backed
//! - `NativeLayer` / `MetalLayer` for the compositor layer behind a view
//!
//! The Cocoa backend implements these for the real AppKit classes; tests use
//! an in-memory object graph.

#[cfg(test)]
pub(crate) mod mock;

use bitflags::bitflags;

bitflags! {
    /// Window style mask bits
    ///
    /// Values match `NSWindowStyleMask` so masks can be converted losslessly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleMask: u64 {
        const TITLED = 1 << 0;
        const CLOSABLE = 1 << 1;
        const MINIATURIZABLE = 1 << 2;
        const RESIZABLE = 1 << 3;
        const FULL_SCREEN = 1 << 14;
        const FULL_SIZE_CONTENT_VIEW = 1 << 15;

        // Keep bits we don't model when writing a mask back
        const _ = !0;
    }
}

/// A compositor layer backing a view
pub trait NativeLayer {
    /// Set whether the layer is treated as fully opaque
    fn set_opaque(&self, opaque: bool);

    /// Replace the layer's background fill with a fully clear color
    fn set_clear_background(&self);
}

/// A layer that presents frames rendered through Metal
pub trait MetalLayer: NativeLayer {
    /// Set the number of drawables that may be in flight at once
    fn set_maximum_drawable_count(&self, count: usize);

    /// Toggle presentation gated on the display's vertical sync
    fn set_display_sync_enabled(&self, enabled: bool);
}

/// Result of the capability check on a view's backing layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerBacking<L, M> {
    /// Any other kind of layer
    Plain(L),
    /// A Metal-presenting layer
    Metal(M),
}

impl<L, M> LayerBacking<L, M> {
    /// The Metal layer, if this backing presents through Metal
    pub fn metal(self) -> Option<M> {
        match self {
            LayerBacking::Metal(layer) => Some(layer),
            LayerBacking::Plain(_) => None,
        }
    }

    /// Whether this backing presents through Metal
    pub fn is_metal(&self) -> bool {
        matches!(self, LayerBacking::Metal(_))
    }
}

impl<L: NativeLayer, M: MetalLayer> NativeLayer for LayerBacking<L, M> {
    fn set_opaque(&self, opaque: bool) {
        match self {
            LayerBacking::Plain(layer) => layer.set_opaque(opaque),
            LayerBacking::Metal(layer) => layer.set_opaque(opaque),
        }
    }

    fn set_clear_background(&self) {
        match self {
            LayerBacking::Plain(layer) => layer.set_clear_background(),
            LayerBacking::Metal(layer) => layer.set_clear_background(),
        }
    }
}

/// A rendering view owned by the host toolkit
pub trait NativeView {
    /// Window type returned by [`NativeView::window`]
    type Window: NativeWindow;
    /// Non-Metal layer type
    type Layer: NativeLayer;
    /// Metal-presenting layer type
    type MetalLayer: MetalLayer;

    /// Ask the toolkit to back this view with a layer
    fn set_wants_layer(&self, wants_layer: bool);

    /// The view's backing layer, classified by capability
    fn backing_layer(&self) -> Option<LayerBacking<Self::Layer, Self::MetalLayer>>;

    /// The window currently hosting this view, if any
    fn window(&self) -> Option<Self::Window>;
}

/// A top-level window owned by the host toolkit
pub trait NativeWindow {
    /// View type returned by [`NativeWindow::surface_content_view`]
    type ContentView: NativeView;

    /// Set whether the title bar is drawn transparently
    fn set_titlebar_appears_transparent(&self, transparent: bool);

    /// Get the current style mask
    fn style_mask(&self) -> StyleMask;

    /// Replace the style mask
    fn set_style_mask(&self, mask: StyleMask);

    /// Set whether the window is treated as fully opaque
    fn set_opaque(&self, opaque: bool);

    /// Replace the window's background fill with a fully clear color
    fn set_clear_background(&self);

    /// The content view, but only if it is a graphics-surface view
    /// (an `MTKView` on macOS)
    fn surface_content_view(&self) -> Option<Self::ContentView>;

    /// Ratio of physical pixels to logical points
    fn backing_scale_factor(&self) -> f64;
}
