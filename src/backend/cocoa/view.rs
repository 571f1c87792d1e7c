//! NSView and layer adapters

use objc2::rc::Retained;
use objc2_app_kit::{NSColor, NSView, NSWindow};
use objc2_quartz_core::{CALayer, CAMetalLayer};

use crate::host::{LayerBacking, MetalLayer, NativeLayer, NativeView};

impl NativeView for NSView {
    type Window = Retained<NSWindow>;
    type Layer = Retained<CALayer>;
    type MetalLayer = Retained<CAMetalLayer>;

    fn set_wants_layer(&self, wants_layer: bool) {
        unsafe { self.setWantsLayer(wants_layer) };
    }

    fn backing_layer(&self) -> Option<LayerBacking<Self::Layer, Self::MetalLayer>> {
        let layer = unsafe { self.layer() }?;
        Some(match layer.downcast::<CAMetalLayer>() {
            Ok(metal_layer) => LayerBacking::Metal(metal_layer),
            Err(layer) => LayerBacking::Plain(layer),
        })
    }

    fn window(&self) -> Option<Self::Window> {
        unsafe { NSView::window(self) }
    }
}

impl NativeLayer for CALayer {
    fn set_opaque(&self, opaque: bool) {
        unsafe { self.setOpaque(opaque) };
    }

    fn set_clear_background(&self) {
        let clear = NSColor::clearColor().CGColor();
        unsafe { self.setBackgroundColor(Some(&*clear)) };
    }
}

impl NativeLayer for CAMetalLayer {
    fn set_opaque(&self, opaque: bool) {
        NativeLayer::set_opaque(&**self, opaque);
    }

    fn set_clear_background(&self) {
        NativeLayer::set_clear_background(&**self);
    }
}

impl MetalLayer for CAMetalLayer {
    fn set_maximum_drawable_count(&self, count: usize) {
        unsafe { self.setMaximumDrawableCount(count) };
    }

    fn set_display_sync_enabled(&self, enabled: bool) {
        unsafe { self.setDisplaySyncEnabled(enabled) };
    }
}
