#![cfg(target_arch = "wasm32")]
//! Browser entry point: reads the page, builds the interaction core, wires
//! events, and starts the frame loop that projects core state back as CSS.

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod ui;

use app_core::{
    AutoAdvance, Carousel, CarouselSet, Gallery, PetalField, PointerSpring,
    AUTO_ADVANCE_INTERVAL, PETAL_COUNT,
};
use constants::{
    PETAL_SEED, STORY_CAROUSEL, STORY_CARD_CLASS, STORY_CONTAINER_ID, STORY_NEXT_ID,
    STORY_PREV_ID, TESTIMONIAL_CAROUSEL, TESTIMONIAL_PANEL_CLASS,
};
use glam::Vec2;
use instant::Instant;
use overlay::ScrollLock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let viewport = viewport_size(&window);

    // Gallery: items parsed from the markup, modal + filters wired on top
    let ui::GalleryDom { tiles, items } = ui::read_gallery(&document);
    let gallery = Rc::new(RefCell::new(Gallery::new(items)));
    let lock = Rc::new(RefCell::new(None::<ScrollLock>));
    ui::wire_gallery(&document, tiles, gallery.clone(), lock.clone());

    // Carousels: gesture-driven story cards, timer-driven testimonial pages
    let story_cards = dom::elements_with_class(&document, STORY_CARD_CLASS);
    let testimonial_panels = dom::elements_with_class(&document, TESTIMONIAL_PANEL_CLASS);
    let per_page = input::testimonials_per_page(viewport.x);
    let mut set = CarouselSet::default();
    set.insert(STORY_CAROUSEL, Carousel::new(story_cards.len()));
    set.insert(
        TESTIMONIAL_CAROUSEL,
        Carousel::new(input::testimonial_pages(testimonial_panels.len(), per_page)),
    );
    let carousels = Rc::new(RefCell::new(set));
    log::info!(
        "[init] {} story cards, {} testimonial panels",
        story_cards.len(),
        testimonial_panels.len()
    );

    // Arrow buttons; the core arbitrates them against an active gesture
    {
        let carousels_btn = carousels.clone();
        dom::add_click_listener(&document, STORY_PREV_ID, move || {
            if let Some(c) = carousels_btn.borrow_mut().get_mut(STORY_CAROUSEL) {
                c.previous();
            }
        });
        let carousels_btn = carousels.clone();
        dom::add_click_listener(&document, STORY_NEXT_ID, move || {
            if let Some(c) = carousels_btn.borrow_mut().get_mut(STORY_CAROUSEL) {
                c.next();
            }
        });
    }

    let story_container = dom::html_element(&document, STORY_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{STORY_CONTAINER_ID}"))?;
    events::pointer::wire_story_gestures(events::pointer::GestureWiring {
        container: story_container,
        carousels: carousels.clone(),
    });

    let pointer_uv = Rc::new(RefCell::new([0.5f32, 0.5]));
    events::pointer::wire_pointer_uv(pointer_uv.clone());
    events::scroll::wire_case_study_scroll(&document);
    events::keyboard::wire_global_keydown(events::keyboard::KeyWiring {
        document: document.clone(),
        gallery: gallery.clone(),
        lock: lock.clone(),
        carousels: carousels.clone(),
    });

    // Decorative layers
    let petal_nodes = ui::spawn_petal_nodes(&document, PETAL_COUNT);
    let parallax_layers = ui::parallax_layers(&document);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        carousels,
        story_cards,
        testimonial_panels,
        testimonials_per_page: per_page,
        auto: AutoAdvance::new(AUTO_ADVANCE_INTERVAL),
        petals: PetalField::new(PETAL_COUNT, viewport, PETAL_SEED),
        petal_nodes,
        parallax_layers,
        spring: PointerSpring::new(),
        pointer_uv,
        last_instant: Instant::now(),
    }));
    frame::wire_resize(ctx.clone());
    frame::start_loop(ctx);

    Ok(())
}

fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    Vec2::new(w.max(1.0), h.max(1.0))
}
