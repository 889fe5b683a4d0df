use crate::constants::STORY_CAROUSEL;
use crate::overlay::{self, ScrollLock};
use app_core::{CarouselSet, Gallery, SwipeDirection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub document: web::Document,
    pub gallery: Rc<RefCell<Gallery>>,
    pub lock: Rc<RefCell<Option<ScrollLock>>>,
    pub carousels: Rc<RefCell<CarouselSet>>,
}

/// Escape closes the modal through the same exit path as the close button;
/// arrow keys step the modal when it is open, the story carousel otherwise.
pub fn wire_global_keydown(w: KeyWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => overlay::close_modal(&w.document, &w.gallery, &w.lock),
            "ArrowRight" | "ArrowLeft" => {
                let direction = if ev.key() == "ArrowRight" {
                    SwipeDirection::Forward
                } else {
                    SwipeDirection::Backward
                };
                let modal_open = w.gallery.borrow().modal_index().is_some();
                if modal_open {
                    w.gallery.borrow_mut().modal_step(direction);
                    overlay::refresh_modal(&w.document, &w.gallery);
                } else if let Some(c) = w.carousels.borrow_mut().get_mut(STORY_CAROUSEL) {
                    match direction {
                        SwipeDirection::Forward => c.next(),
                        SwipeDirection::Backward => c.previous(),
                    }
                }
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
