//! In-memory host object graph for tests
//!
//! Mirrors the slice of AppKit state the bridge touches. Objects are shared
//! through `Rc` the way AppKit hands out retained references, and every
//! property lives in a `Cell` so tests can read back what the bridge wrote.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{LayerBacking, MetalLayer, NativeLayer, NativeView, NativeWindow, StyleMask};

/// Layer state shared by plain and Metal mock layers
#[derive(Debug)]
pub struct MockLayer {
    pub opaque: Cell<bool>,
    pub background_clear: Cell<bool>,
}

impl MockLayer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            opaque: Cell::new(true),
            background_clear: Cell::new(false),
        })
    }
}

impl NativeLayer for Rc<MockLayer> {
    fn set_opaque(&self, opaque: bool) {
        self.opaque.set(opaque);
    }

    fn set_clear_background(&self) {
        self.background_clear.set(true);
    }
}

/// Mock `CAMetalLayer`
#[derive(Debug)]
pub struct MockMetalLayer {
    pub base: Rc<MockLayer>,
    pub maximum_drawable_count: Cell<usize>,
    pub display_sync_enabled: Cell<bool>,
}

impl MockMetalLayer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            base: MockLayer::new(),
            maximum_drawable_count: Cell::new(3),
            display_sync_enabled: Cell::new(true),
        })
    }
}

impl NativeLayer for Rc<MockMetalLayer> {
    fn set_opaque(&self, opaque: bool) {
        self.base.set_opaque(opaque);
    }

    fn set_clear_background(&self) {
        self.base.set_clear_background();
    }
}

impl MetalLayer for Rc<MockMetalLayer> {
    fn set_maximum_drawable_count(&self, count: usize) {
        self.maximum_drawable_count.set(count);
    }

    fn set_display_sync_enabled(&self, enabled: bool) {
        self.display_sync_enabled.set(enabled);
    }
}

/// What a mock view is backed by
#[derive(Debug, Clone)]
pub enum MockBacking {
    Plain(Rc<MockLayer>),
    Metal(Rc<MockMetalLayer>),
}

/// Mock `NSView` / `MTKView`
#[derive(Debug)]
pub struct MockView {
    /// Whether this is a graphics-surface (`MTKView`-like) view
    pub is_surface: bool,
    pub wants_layer: Cell<bool>,
    pub backing: RefCell<Option<MockBacking>>,
    pub window: RefCell<Weak<MockWindow>>,
}

impl MockView {
    /// A surface view backed by a Metal layer
    pub fn metal() -> Rc<Self> {
        Self::with_backing(true, Some(MockBacking::Metal(MockMetalLayer::new())))
    }

    /// A plain view with an ordinary layer
    pub fn plain() -> Rc<Self> {
        Self::with_backing(false, Some(MockBacking::Plain(MockLayer::new())))
    }

    pub fn with_backing(is_surface: bool, backing: Option<MockBacking>) -> Rc<Self> {
        Rc::new(Self {
            is_surface,
            wants_layer: Cell::new(false),
            backing: RefCell::new(backing),
            window: RefCell::new(Weak::new()),
        })
    }

    pub fn metal_layer(&self) -> Option<Rc<MockMetalLayer>> {
        match &*self.backing.borrow() {
            Some(MockBacking::Metal(layer)) => Some(layer.clone()),
            _ => None,
        }
    }

    pub fn plain_layer(&self) -> Option<Rc<MockLayer>> {
        match &*self.backing.borrow() {
            Some(MockBacking::Plain(layer)) => Some(layer.clone()),
            _ => None,
        }
    }
}

impl NativeView for Rc<MockView> {
    type Window = Rc<MockWindow>;
    type Layer = Rc<MockLayer>;
    type MetalLayer = Rc<MockMetalLayer>;

    fn set_wants_layer(&self, wants_layer: bool) {
        self.wants_layer.set(wants_layer);
    }

    fn backing_layer(&self) -> Option<LayerBacking<Self::Layer, Self::MetalLayer>> {
        self.backing.borrow().as_ref().map(|backing| match backing {
            MockBacking::Plain(layer) => LayerBacking::Plain(layer.clone()),
            MockBacking::Metal(layer) => LayerBacking::Metal(layer.clone()),
        })
    }

    fn window(&self) -> Option<Self::Window> {
        self.window.borrow().upgrade()
    }
}

/// Mock `NSWindow`
#[derive(Debug)]
pub struct MockWindow {
    pub titlebar_transparent: Cell<bool>,
    pub style_mask: Cell<StyleMask>,
    pub opaque: Cell<bool>,
    pub background_clear: Cell<bool>,
    pub backing_scale_factor: Cell<f64>,
    pub content_view: RefCell<Option<Rc<MockView>>>,
}

impl MockWindow {
    /// A standard titled window with no content view
    pub fn new(backing_scale_factor: f64) -> Rc<Self> {
        Rc::new(Self {
            titlebar_transparent: Cell::new(false),
            style_mask: Cell::new(
                StyleMask::TITLED
                    | StyleMask::CLOSABLE
                    | StyleMask::MINIATURIZABLE
                    | StyleMask::RESIZABLE,
            ),
            opaque: Cell::new(true),
            background_clear: Cell::new(false),
            backing_scale_factor: Cell::new(backing_scale_factor),
            content_view: RefCell::new(None),
        })
    }

    /// Install `view` as the content view, linking it back to this window
    pub fn set_content_view(self: &Rc<Self>, view: &Rc<MockView>) {
        *view.window.borrow_mut() = Rc::downgrade(self);
        *self.content_view.borrow_mut() = Some(view.clone());
    }
}

impl NativeWindow for Rc<MockWindow> {
    type ContentView = Rc<MockView>;

    fn set_titlebar_appears_transparent(&self, transparent: bool) {
        self.titlebar_transparent.set(transparent);
    }

    fn style_mask(&self) -> StyleMask {
        self.style_mask.get()
    }

    fn set_style_mask(&self, mask: StyleMask) {
        self.style_mask.set(mask);
    }

    fn set_opaque(&self, opaque: bool) {
        self.opaque.set(opaque);
    }

    fn set_clear_background(&self) {
        self.background_clear.set(true);
    }

    fn surface_content_view(&self) -> Option<Self::ContentView> {
        self.content_view
            .borrow()
            .as_ref()
            .filter(|view| view.is_surface)
            .cloned()
    }

    fn backing_scale_factor(&self) -> f64 {
        self.backing_scale_factor.get()
    }
}
