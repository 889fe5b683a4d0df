// Ids, classes and data attributes the front-end binds to in the markup.

// Carousel registry keys
pub const STORY_CAROUSEL: &str = "stories";
pub const TESTIMONIAL_CAROUSEL: &str = "testimonials";

// Story-card carousel (the about/timeline section)
pub const STORY_CONTAINER_ID: &str = "story-carousel";
pub const STORY_PREV_ID: &str = "story-prev";
pub const STORY_NEXT_ID: &str = "story-next";
pub const STORY_CARD_CLASS: &str = "story-card";

// Testimonial carousel (timer driven)
pub const TESTIMONIAL_PANEL_CLASS: &str = "testimonial-panel";

// Case-study viewer and its phased children
pub const CASE_STUDY_VIEWER_ID: &str = "case-study-viewer";
pub const PHASE_TESTIMONIAL_ID: &str = "cs-testimonial";
pub const PHASE_HEADER_ID: &str = "cs-header";
pub const PHASE_PRODUCTS_ID: &str = "cs-products";
pub const PHASE_CASE_STUDY_ID: &str = "cs-closing";

// Gallery grid and modal viewer
pub const GALLERY_TILE_CLASS: &str = "gallery-tile";
pub const FILTER_BUTTON_CLASS: &str = "filter-button";
pub const MODAL_ID: &str = "gallery-modal";
pub const MODAL_IMAGE_ID: &str = "gallery-modal-image";
pub const MODAL_CAPTION_ID: &str = "gallery-modal-caption";
pub const MODAL_DETAIL_ID: &str = "gallery-modal-detail";
pub const MODAL_CLOSE_ID: &str = "gallery-modal-close";
pub const MODAL_PREV_ID: &str = "gallery-modal-prev";
pub const MODAL_NEXT_ID: &str = "gallery-modal-next";
pub const MODAL_BACKDROP_ID: &str = "gallery-modal-backdrop";

// Decorative layers
pub const PETAL_LAYER_ID: &str = "petal-layer";
pub const PETAL_CLASS: &str = "petal";
pub const PARALLAX_LAYER_CLASS: &str = "parallax-layer";

// Shared state classes / attributes
pub const HIDDEN_CLASS: &str = "hidden";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_VENUE: &str = "data-venue";
pub const DATA_PUBLICATION: &str = "data-publication";
pub const DATA_ISSUE: &str = "data-issue";
pub const DATA_PRODUCTION: &str = "data-production";
pub const DATA_ROLE: &str = "data-role";
pub const DATA_TECHNIQUE: &str = "data-technique";
pub const DATA_VIDEO: &str = "data-video";
pub const DATA_FULL: &str = "data-full";
pub const DATA_ALT: &str = "data-alt";
pub const DATA_CAPTION: &str = "data-caption";
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_DEPTH: &str = "data-depth";

// Petal field seeding
pub const PETAL_SEED: u64 = 42;
