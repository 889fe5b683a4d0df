use crate::constants::{
    CASE_STUDY_VIEWER_ID, PHASE_CASE_STUDY_ID, PHASE_HEADER_ID, PHASE_PRODUCTS_ID,
    PHASE_TESTIMONIAL_ID,
};
use crate::dom;
use app_core::scroll_phases;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the case-study viewer's four reveal phases from its own scroll
/// offset (not the page's). Recomputed on every scroll event; the phases
/// are a pure function of the offset and the measured height.
pub fn wire_case_study_scroll(document: &web::Document) {
    let Some(viewer) = dom::html_element(document, CASE_STUDY_VIEWER_ID) else {
        log::warn!("[scroll] missing #{CASE_STUDY_VIEWER_ID}; phases disabled");
        return;
    };

    let doc = document.clone();
    let viewer_in_closure = viewer.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let phases = scroll_phases(
            viewer_in_closure.scroll_top() as f32,
            viewer_in_closure.client_height() as f32,
        );
        apply_phase(&doc, PHASE_TESTIMONIAL_ID, phases.testimonial);
        apply_phase(&doc, PHASE_HEADER_ID, phases.header);
        apply_phase(&doc, PHASE_PRODUCTS_ID, phases.products);
        apply_phase(&doc, PHASE_CASE_STUDY_ID, phases.case_study);
    }) as Box<dyn FnMut(_)>);

    let _ = viewer.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_phase(document: &web::Document, id: &str, value: f32) {
    if let Some(el) = dom::html_element(document, id) {
        dom::set_opacity(&el, value);
    }
}
