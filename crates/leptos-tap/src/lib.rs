//! Leptos Tap Utilities
//!
//! Click and touch taps for drawing surfaces and the marks drawn on them.
//!
//! Listeners are bound directly on the element with `passive: false`
//! instead of going through Leptos' delegated `on:` handlers: the root
//! delegated `touchstart` listener is passive in mobile browsers, so
//! `preventDefault` there cannot suppress the emulated click that follows
//! a touch. A mark's handlers stop propagation, so tapping a mark never
//! reaches the surface underneath.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Bounding box of the tapped surface in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A tap on a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub client_x: f64,
    pub client_y: f64,
    /// Surface box at the time of the tap
    pub rect: SurfaceRect,
}

impl Tap {
    /// Tap at integer client coordinates, as reported by mouse and touch events
    pub fn new(client_x: i32, client_y: i32, rect: SurfaceRect) -> Self {
        Self {
            client_x: f64::from(client_x),
            client_y: f64::from(client_y),
            rect,
        }
    }

    /// Position relative to the surface's top-left corner
    pub fn offset(&self) -> (f64, f64) {
        (self.client_x - self.rect.left, self.client_y - self.rect.top)
    }
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners bound to one element; unbound when dropped.
///
/// Keep it in a `StoredValue::new_local` so it lives exactly as long as
/// the component that owns the element.
pub struct TapListeners {
    target: web_sys::EventTarget,
    bound: Vec<(&'static str, Listener)>,
}

impl TapListeners {
    fn new(target: &web_sys::Element) -> Self {
        Self {
            target: target.clone().into(),
            bound: Vec::new(),
        }
    }

    fn bind(&mut self, event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Listener::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        if self
            .target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .is_ok()
        {
            self.bound.push((event, closure));
        }
    }
}

impl Drop for TapListeners {
    fn drop(&mut self) {
        for (event, closure) in self.bound.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

fn surface_rect(element: &web_sys::Element) -> SurfaceRect {
    let rect = element.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Bind click and touchstart on a surface.
///
/// `touchstart` cancels the emulated click, so one gesture is one tap.
pub fn bind_surface_taps<F>(element: &web_sys::Element, on_tap: F) -> TapListeners
where
    F: Fn(Tap) + Clone + 'static,
{
    let mut listeners = TapListeners::new(element);

    let surface = element.clone();
    let on_click = on_tap.clone();
    listeners.bind("click", move |ev: web_sys::Event| {
        if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
            on_click(Tap::new(ev.client_x(), ev.client_y(), surface_rect(&surface)));
        }
    });

    let surface = element.clone();
    listeners.bind("touchstart", move |ev: web_sys::Event| {
        ev.prevent_default();
        let Some(touch) = ev
            .dyn_ref::<web_sys::TouchEvent>()
            .and_then(|ev| ev.touches().get(0))
        else {
            return;
        };
        on_tap(Tap::new(touch.client_x(), touch.client_y(), surface_rect(&surface)));
    });

    listeners
}

/// Bind click and touch handlers on a mark drawn over a surface.
///
/// Mouse removes on click; touch swallows `touchstart` and fires on `touchend`.
pub fn bind_mark_taps<F>(element: &web_sys::Element, on_tap: F) -> TapListeners
where
    F: Fn() + Clone + 'static,
{
    let mut listeners = TapListeners::new(element);

    let on_click = on_tap.clone();
    listeners.bind("click", move |ev: web_sys::Event| {
        ev.prevent_default();
        ev.stop_propagation();
        on_click();
    });

    listeners.bind("touchstart", |ev: web_sys::Event| {
        ev.stop_propagation();
        ev.prevent_default();
    });

    listeners.bind("touchend", move |ev: web_sys::Event| {
        ev.prevent_default();
        ev.stop_propagation();
        on_tap();
    });

    listeners
}

/// Bind `bind` to the element behind `node_ref` once it mounts; the
/// listeners are dropped with the calling component.
pub fn use_tap_listeners<E, B>(node_ref: NodeRef<E>, bind: B)
where
    E: leptos::tachys::html::element::ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
    B: FnOnce(&web_sys::Element) -> TapListeners + 'static,
{
    let slot = StoredValue::new_local(None::<TapListeners>);
    node_ref.on_load(move |el| {
        let element: &web_sys::Element = el.unchecked_ref();
        slot.set_value(Some(bind(element)));
    });
}
