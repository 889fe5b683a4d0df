use app_core::{Petal, SlotTransform, PETAL_SIZE_MAX};
use glam::Vec2;
use web_sys as web;

// Responsive testimonial paging
pub const TESTIMONIALS_PER_PAGE_WIDE: usize = 2;
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 900.0;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_element_px(ev: &web::PointerEvent, el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn pointer_window_uv(ev: &web::PointerEvent, window: &web::Window) -> [f32; 2] {
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
    if w > 0.0 && h > 0.0 {
        let u = (ev.client_x() as f32 / w).clamp(0.0, 1.0);
        let v = (ev.client_y() as f32 / h).clamp(0.0, 1.0);
        [u, v]
    } else {
        [0.5, 0.5]
    }
}

// ---------------- CSS builders (pure) ----------------
#[inline]
pub fn slot_css(t: &SlotTransform) -> String {
    format!(
        "translateX({:.2}%) translateZ({:.2}px) rotateY({:.2}deg) scale({:.3})",
        t.translate_x, t.translate_z, t.rotate_y, t.scale
    )
}

#[inline]
pub fn petal_css(p: &Petal) -> String {
    // petals share one base sprite; size is expressed as a scale factor
    let scale = p.size / PETAL_SIZE_MAX;
    format!(
        "translate3d({:.1}px, {:.1}px, 0) rotate({:.1}deg) scale({:.3})",
        p.pos.x, p.pos.y, p.spin_deg, scale
    )
}

#[inline]
pub fn layer_css(offset: Vec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y)
}

// ---------------- Responsive layout helpers (pure) ----------------
#[inline]
pub fn testimonials_per_page(viewport_width: f32) -> usize {
    if viewport_width >= WIDE_LAYOUT_MIN_WIDTH {
        TESTIMONIALS_PER_PAGE_WIDE
    } else {
        1
    }
}

#[inline]
pub fn testimonial_pages(panel_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    panel_count.div_ceil(per_page)
}
