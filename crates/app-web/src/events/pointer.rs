use crate::constants::STORY_CAROUSEL;
use crate::input;
use app_core::{CarouselSet, DragUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct GestureWiring {
    pub container: web::HtmlElement,
    pub carousels: Rc<RefCell<CarouselSet>>,
}

/// Wire the story-card carousel's drag gesture. Pointer-down lands on the
/// container; move, up and cancel are observed on the window so a release
/// outside the element still settles the gesture.
pub fn wire_story_gestures(w: GestureWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_settle(&w, "pointerup");
    wire_settle(&w, "pointercancel");
}

fn wire_pointerdown(w: &GestureWiring) {
    let w = w.clone();
    let container_for_listener = w.container.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_element_px(&ev, &w.container);
        if let Some(c) = w.carousels.borrow_mut().get_mut(STORY_CAROUSEL) {
            c.begin_drag(pos.x, pos.y, ev.time_stamp());
        }
        // capture keeps move/up flowing to us even when the pointer strays
        let _ = w.container.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    let _ = container_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &GestureWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_element_px(&ev, &w.container);
        let width = w.container.get_bounding_client_rect().width() as f32;
        let update = match w.carousels.borrow_mut().get_mut(STORY_CAROUSEL) {
            Some(c) => c.drag_to(pos.x, pos.y, ev.time_stamp(), width),
            None => return,
        };
        // once the drag locks horizontal, the page must not scroll under it
        if let DragUpdate::Horizontal { .. } = update {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_settle(w: &GestureWiring, event: &str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let settle = match w.carousels.borrow_mut().get_mut(STORY_CAROUSEL) {
            Some(c) => c.end_drag(),
            None => return,
        };
        if let Some(direction) = settle.direction {
            log::info!("[gesture] settle {:?} -> card {}", direction, settle.index);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Track the pointer in window uv space for the parallax spring.
pub fn wire_pointer_uv(pointer_uv: Rc<RefCell<[f32; 2]>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(window) = web::window() {
            *pointer_uv.borrow_mut() = input::pointer_window_uv(&ev, &window);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
