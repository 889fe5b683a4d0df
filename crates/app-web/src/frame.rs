//! Per-frame projection of core state onto the DOM.

use crate::constants::{STORY_CAROUSEL, TESTIMONIAL_CAROUSEL};
use crate::{dom, input};
use app_core::{AutoAdvance, Carousel, CarouselSet, PetalField, PointerSpring};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub carousels: Rc<RefCell<CarouselSet>>,
    pub story_cards: Vec<web::HtmlElement>,
    pub testimonial_panels: Vec<web::HtmlElement>,
    pub testimonials_per_page: usize,
    pub auto: AutoAdvance,
    pub petals: PetalField,
    pub petal_nodes: Vec<web::HtmlElement>,
    pub parallax_layers: Vec<(web::HtmlElement, f32)>,
    pub spring: PointerSpring,
    pub pointer_uv: Rc<RefCell<[f32; 2]>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        {
            let mut set = self.carousels.borrow_mut();

            // Timer-driven testimonial pages
            if let Some(c) = set.get_mut(TESTIMONIAL_CAROUSEL) {
                for _ in 0..self.auto.tick(dt) {
                    c.next();
                }
                let current = c.current_index();
                let per_page = self.testimonials_per_page;
                for (i, panel) in self.testimonial_panels.iter().enumerate() {
                    let visible = per_page != 0 && i / per_page == current;
                    dom::set_opacity(panel, if visible { 1.0 } else { 0.0 });
                    let _ = panel.set_attribute("aria-hidden", if visible { "false" } else { "true" });
                }
            }

            // Gesture-driven story cards
            if let Some(c) = set.get(STORY_CAROUSEL) {
                project_story_cards(&self.story_cards, c);
            }
        }

        // Petal drift
        self.petals.tick(dt);
        for (node, petal) in self.petal_nodes.iter().zip(self.petals.petals()) {
            dom::set_style(node, "transform", &input::petal_css(petal));
        }

        // Pointer parallax
        let uv = *self.pointer_uv.borrow();
        self.spring.step(Vec2::new(uv[0], uv[1]), dt_sec);
        for (layer, depth) in &self.parallax_layers {
            dom::set_style(layer, "transform", &input::layer_css(self.spring.layer_offset(*depth)));
        }
    }

    /// Responsive relayout: re-page the testimonials and rescale the petal
    /// field. The auto-advance timer restarts whenever the page count can
    /// have changed, so it never references a stale count.
    pub fn handle_resize(&mut self, viewport: Vec2) {
        let per_page = input::testimonials_per_page(viewport.x);
        if per_page != self.testimonials_per_page {
            self.testimonials_per_page = per_page;
            let pages = input::testimonial_pages(self.testimonial_panels.len(), per_page);
            if let Some(c) = self.carousels.borrow_mut().get_mut(TESTIMONIAL_CAROUSEL) {
                c.set_len(pages);
            }
            self.auto.reset();
            log::info!("[layout] testimonials repaged: {per_page} per page, {pages} pages");
        }
        self.petals.resize(viewport);
    }
}

fn project_story_cards(cards: &[web::HtmlElement], carousel: &Carousel) {
    let slots = carousel.rendered_slots();
    for (i, card) in cards.iter().enumerate() {
        match slots.iter().find(|s| s.index == i) {
            Some(s) => {
                dom::set_style(card, "transform", &input::slot_css(&s.transform));
                dom::set_opacity(card, s.transform.opacity);
                // the centered card stacks above its neighbours
                dom::set_style(card, "z-index", if s.slot == 0 { "2" } else { "1" });
            }
            None => dom::set_opacity(card, 0.0),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            frame_ctx
                .borrow_mut()
                .handle_resize(Vec2::new(width.max(1.0), height.max(1.0)));
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
