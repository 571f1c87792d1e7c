//! NSWindow adapter

use objc2::rc::Retained;
use objc2_app_kit::{NSColor, NSView, NSWindow, NSWindowStyleMask};
use objc2_metal_kit::MTKView;

use crate::host::{NativeWindow, StyleMask};

impl NativeWindow for NSWindow {
    type ContentView = Retained<NSView>;

    fn set_titlebar_appears_transparent(&self, transparent: bool) {
        unsafe { self.setTitlebarAppearsTransparent(transparent) };
    }

    fn style_mask(&self) -> StyleMask {
        StyleMask::from_bits_retain(self.styleMask().0 as u64)
    }

    fn set_style_mask(&self, mask: StyleMask) {
        unsafe { self.setStyleMask(NSWindowStyleMask(mask.bits() as usize)) };
    }

    fn set_opaque(&self, opaque: bool) {
        unsafe { self.setOpaque(opaque) };
    }

    fn set_clear_background(&self) {
        let clear = NSColor::clearColor();
        unsafe { self.setBackgroundColor(Some(&*clear)) };
    }

    fn surface_content_view(&self) -> Option<Self::ContentView> {
        // Only MTKView content gets its layer touched
        unsafe { self.contentView() }
            .filter(|view| view.downcast_ref::<MTKView>().is_some())
    }

    fn backing_scale_factor(&self) -> f64 {
        self.backingScaleFactor()
    }
}
