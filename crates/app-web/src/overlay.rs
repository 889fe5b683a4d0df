//! Gallery modal: open/close, content refresh, and the scroll lock that
//! freezes the page behind it.

use crate::constants::{
    HIDDEN_CLASS, MODAL_CAPTION_ID, MODAL_DETAIL_ID, MODAL_ID, MODAL_IMAGE_ID,
};
use crate::dom;
use app_core::{Gallery, MediaRef};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Scoped scroll lock.
///
/// Acquiring captures the page's scroll offset and pins the body with a
/// fixed-position style; dropping restores both. Every modal exit path
/// (close button, backdrop click, Escape) releases by dropping the guard,
/// so the page can never be left pinned.
pub struct ScrollLock {
    body: web::HtmlElement,
    scroll_y: f64,
}

impl ScrollLock {
    pub fn engage() -> Option<Self> {
        let window = web::window()?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let body = window.document()?.body()?;
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{scroll_y}px"));
        let _ = style.set_property("left", "0");
        let _ = style.set_property("right", "0");
        Some(Self { body, scroll_y })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = style.remove_property("position");
        let _ = style.remove_property("top");
        let _ = style.remove_property("left");
        let _ = style.remove_property("right");
        if let Some(window) = web::window() {
            window.scroll_to_with_x_and_y(0.0, self.scroll_y);
        }
    }
}

pub fn open_modal(
    document: &web::Document,
    gallery: &Rc<RefCell<Gallery>>,
    lock: &Rc<RefCell<Option<ScrollLock>>>,
    index: usize,
) {
    if !gallery.borrow_mut().open_modal(index) {
        return;
    }
    {
        // one lock per open; stepping between items keeps the original capture
        let mut slot = lock.borrow_mut();
        if slot.is_none() {
            *slot = ScrollLock::engage();
        }
    }
    refresh_modal(document, gallery);
    if let Some(el) = dom::html_element(document, MODAL_ID) {
        let _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
    log::info!("[modal] open item {index}");
}

pub fn close_modal(
    document: &web::Document,
    gallery: &Rc<RefCell<Gallery>>,
    lock: &Rc<RefCell<Option<ScrollLock>>>,
) {
    gallery.borrow_mut().close_modal();
    // dropping the guard restores the body style and the scroll offset
    lock.borrow_mut().take();
    if let Some(el) = dom::html_element(document, MODAL_ID) {
        let _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Re-render the modal for the gallery's current selection. The full-size
/// image is decoded off-DOM first so the reveal never paints half-loaded.
pub fn refresh_modal(document: &web::Document, gallery: &Rc<RefCell<Gallery>>) {
    let (src, alt, caption, detail) = {
        let g = gallery.borrow();
        let Some(item) = g.modal_item() else {
            return;
        };
        let (src, alt) = match &item.media {
            MediaRef::Image { src, alt } => (src.clone(), alt.clone()),
            // video entries show their poster frame in the modal
            MediaRef::Video { poster, .. } => (poster.clone(), String::new()),
        };
        (src, alt, item.caption.clone(), item.category.detail())
    };

    if let Some(el) = dom::html_element(document, MODAL_CAPTION_ID) {
        el.set_text_content(Some(&caption));
    }
    if let Some(el) = dom::html_element(document, MODAL_DETAIL_ID) {
        el.set_text_content(Some(&detail));
    }

    let document = document.clone();
    spawn_local(async move {
        if let Ok(probe) = web::HtmlImageElement::new() {
            probe.set_src(&src);
            let _ = JsFuture::from(probe.decode()).await;
        }
        if let Some(el) = dom::html_element(&document, MODAL_IMAGE_ID) {
            if let Ok(img) = el.dyn_into::<web::HtmlImageElement>() {
                img.set_src(&src);
                img.set_alt(&alt);
            }
        }
    });
}
