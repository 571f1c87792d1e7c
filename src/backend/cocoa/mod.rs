//! Cocoa backend for macOS
//!
//! Implements the host capability traits for the AppKit and Core Animation
//! classes the bridge receives:
//! - NSWindow for windows
//! - NSView (usually an MTKView) for rendering views
//! - CALayer / CAMetalLayer for the layers behind them
//!
//! Objects reached through a borrowed handle come back from AppKit as
//! `Retained` references; the forwarding impls below let the bridge use
//! those exactly like the borrowed ones.

pub mod view;
pub mod window;

use objc2::rc::Retained;

use crate::host::{LayerBacking, MetalLayer, NativeLayer, NativeView, NativeWindow, StyleMask};

impl<T: NativeLayer> NativeLayer for Retained<T> {
    fn set_opaque(&self, opaque: bool) {
        (**self).set_opaque(opaque);
    }

    fn set_clear_background(&self) {
        (**self).set_clear_background();
    }
}

impl<T: MetalLayer> MetalLayer for Retained<T> {
    fn set_maximum_drawable_count(&self, count: usize) {
        (**self).set_maximum_drawable_count(count);
    }

    fn set_display_sync_enabled(&self, enabled: bool) {
        (**self).set_display_sync_enabled(enabled);
    }
}

impl<T: NativeView> NativeView for Retained<T> {
    type Window = T::Window;
    type Layer = T::Layer;
    type MetalLayer = T::MetalLayer;

    fn set_wants_layer(&self, wants_layer: bool) {
        (**self).set_wants_layer(wants_layer);
    }

    fn backing_layer(&self) -> Option<LayerBacking<Self::Layer, Self::MetalLayer>> {
        (**self).backing_layer()
    }

    fn window(&self) -> Option<Self::Window> {
        NativeView::window(&**self)
    }
}

impl<T: NativeWindow> NativeWindow for Retained<T> {
    type ContentView = T::ContentView;

    fn set_titlebar_appears_transparent(&self, transparent: bool) {
        (**self).set_titlebar_appears_transparent(transparent);
    }

    fn style_mask(&self) -> StyleMask {
        (**self).style_mask()
    }

    fn set_style_mask(&self, mask: StyleMask) {
        (**self).set_style_mask(mask);
    }

    fn set_opaque(&self, opaque: bool) {
        (**self).set_opaque(opaque);
    }

    fn set_clear_background(&self) {
        (**self).set_clear_background();
    }

    fn surface_content_view(&self) -> Option<Self::ContentView> {
        (**self).surface_content_view()
    }

    fn backing_scale_factor(&self) -> f64 {
        (**self).backing_scale_factor()
    }
}
