//! Page assembly helpers: reading gallery content out of the markup and
//! wiring the grid, filter buttons, modal controls and decorative layers.

use crate::constants::{
    DATA_ALT, DATA_CAPTION, DATA_CATEGORY, DATA_DEPTH, DATA_FILTER, DATA_FULL, DATA_ISSUE,
    DATA_PRODUCTION, DATA_PUBLICATION, DATA_ROLE, DATA_TECHNIQUE, DATA_VENUE, DATA_VIDEO,
    FILTER_BUTTON_CLASS, GALLERY_TILE_CLASS, HIDDEN_CLASS, MODAL_BACKDROP_ID, MODAL_CLOSE_ID,
    MODAL_NEXT_ID, MODAL_PREV_ID, PARALLAX_LAYER_CLASS, PETAL_CLASS, PETAL_LAYER_ID,
};
use crate::overlay::{self, ScrollLock};
use crate::dom;
use app_core::{
    Category, CategoryKind, Filter, Gallery, GalleryItem, MediaRef, SwipeDirection,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The gallery's DOM tiles plus the typed items parsed out of them. The
/// two run in lockstep: tile order is item order.
pub struct GalleryDom {
    pub tiles: Vec<web::HtmlElement>,
    pub items: Vec<GalleryItem>,
}

pub fn read_gallery(document: &web::Document) -> GalleryDom {
    let tiles = dom::elements_with_class(document, GALLERY_TILE_CLASS);
    let items = tiles.iter().map(read_item).collect();
    GalleryDom { tiles, items }
}

fn attr(el: &web::HtmlElement, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

/// Parse one tile's data attributes into a typed item. Category metadata is
/// resolved here, at the markup boundary; everything downstream dispatches
/// on the variant.
fn read_item(tile: &web::HtmlElement) -> GalleryItem {
    let kind = match attr(tile, DATA_CATEGORY).parse::<CategoryKind>() {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("[gallery] {e}; treating tile as beauty");
            CategoryKind::Beauty
        }
    };
    let category = match kind {
        CategoryKind::Bridal => Category::Bridal {
            venue: attr(tile, DATA_VENUE),
        },
        CategoryKind::Editorial => Category::Editorial {
            publication: attr(tile, DATA_PUBLICATION),
            issue: attr(tile, DATA_ISSUE),
        },
        CategoryKind::Stage => Category::Stage {
            production: attr(tile, DATA_PRODUCTION),
            role: attr(tile, DATA_ROLE),
        },
        CategoryKind::Beauty => Category::Beauty {
            technique: attr(tile, DATA_TECHNIQUE),
        },
    };
    let video = attr(tile, DATA_VIDEO);
    let media = if video.is_empty() {
        MediaRef::Image {
            src: attr(tile, DATA_FULL),
            alt: attr(tile, DATA_ALT),
        }
    } else {
        MediaRef::Video {
            src: video,
            poster: attr(tile, DATA_FULL),
        }
    };
    GalleryItem {
        media,
        caption: attr(tile, DATA_CAPTION),
        category,
    }
}

/// Show or hide tiles to match the gallery's current filter.
pub fn apply_filter(tiles: &[web::HtmlElement], gallery: &Gallery) {
    for (i, tile) in tiles.iter().enumerate() {
        let list = tile.class_list();
        if gallery.is_visible(i) {
            let _ = list.remove_1(HIDDEN_CLASS);
        } else {
            let _ = list.add_1(HIDDEN_CLASS);
        }
    }
}

pub fn wire_gallery(
    document: &web::Document,
    tiles: Vec<web::HtmlElement>,
    gallery: Rc<RefCell<Gallery>>,
    lock: Rc<RefCell<Option<ScrollLock>>>,
) {
    // tile clicks open the modal on their own index
    for (i, tile) in tiles.iter().enumerate() {
        let document = document.clone();
        let gallery = gallery.clone();
        let lock = lock.clone();
        let closure = Closure::wrap(Box::new(move || {
            overlay::open_modal(&document, &gallery, &lock, i);
        }) as Box<dyn FnMut()>);
        let _ = tile.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // filter buttons carry their target in a data attribute
    for button in dom::elements_with_class(document, FILTER_BUTTON_CLASS) {
        let value = attr(&button, DATA_FILTER);
        let gallery = gallery.clone();
        let tiles = tiles.clone();
        let closure = Closure::wrap(Box::new(move || {
            let filter = if value == "all" {
                Filter::All
            } else {
                match value.parse::<CategoryKind>() {
                    Ok(kind) => Filter::Only(kind),
                    Err(e) => {
                        log::warn!("[filter] {e}");
                        return;
                    }
                }
            };
            gallery.borrow_mut().set_filter(filter);
            apply_filter(&tiles, &gallery.borrow());
            log::info!("[filter] {:?}", filter);
        }) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // every modal exit path funnels through close_modal
    {
        let document_c = document.clone();
        let gallery_c = gallery.clone();
        let lock_c = lock.clone();
        dom::add_click_listener(document, MODAL_CLOSE_ID, move || {
            overlay::close_modal(&document_c, &gallery_c, &lock_c);
        });
    }
    {
        let document_c = document.clone();
        let gallery_c = gallery.clone();
        let lock_c = lock.clone();
        dom::add_click_listener(document, MODAL_BACKDROP_ID, move || {
            overlay::close_modal(&document_c, &gallery_c, &lock_c);
        });
    }
    {
        let document_c = document.clone();
        let gallery_c = gallery.clone();
        dom::add_click_listener(document, MODAL_PREV_ID, move || {
            gallery_c.borrow_mut().modal_step(SwipeDirection::Backward);
            overlay::refresh_modal(&document_c, &gallery_c);
        });
    }
    {
        let document_c = document.clone();
        let gallery_c = gallery.clone();
        dom::add_click_listener(document, MODAL_NEXT_ID, move || {
            gallery_c.borrow_mut().modal_step(SwipeDirection::Forward);
            overlay::refresh_modal(&document_c, &gallery_c);
        });
    }
}

/// Create one DOM node per petal inside the petal layer. Missing layer
/// (page variant without the effect) yields an empty list and no frames
/// are wasted on it.
pub fn spawn_petal_nodes(document: &web::Document, count: usize) -> Vec<web::HtmlElement> {
    let Some(layer) = dom::html_element(document, PETAL_LAYER_ID) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name(PETAL_CLASS);
        if layer.append_child(&el).is_ok() {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                out.push(el);
            }
        }
    }
    out
}

/// Parallax layers declare their depth in a data attribute; 0 is pinned,
/// 1 rides the full range.
pub fn parallax_layers(document: &web::Document) -> Vec<(web::HtmlElement, f32)> {
    dom::elements_with_class(document, PARALLAX_LAYER_CLASS)
        .into_iter()
        .map(|el| {
            let depth = el
                .get_attribute(DATA_DEPTH)
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(0.5);
            (el, depth)
        })
        .collect()
}
