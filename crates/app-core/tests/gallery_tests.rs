// Host-side tests for gallery filtering and the modal viewer's selection.

use app_core::error::Error;
use app_core::gallery::{Category, CategoryKind, Filter, Gallery, GalleryItem, MediaRef};
use app_core::gesture::SwipeDirection;

fn image_item(n: usize, category: Category) -> GalleryItem {
    GalleryItem {
        media: MediaRef::Image {
            src: format!("img/look-{n}.jpg"),
            alt: format!("look {n}"),
        },
        caption: format!("Look {n}"),
        category,
    }
}

fn sample_gallery() -> Gallery {
    Gallery::new(vec![
        image_item(
            0,
            Category::Bridal {
                venue: "Villa Aurelia".into(),
            },
        ),
        image_item(
            1,
            Category::Editorial {
                publication: "Voce".into(),
                issue: "SS24".into(),
            },
        ),
        image_item(
            2,
            Category::Bridal {
                venue: "Lago di Como".into(),
            },
        ),
        image_item(
            3,
            Category::Stage {
                production: "Giselle".into(),
                role: "Myrtha".into(),
            },
        ),
    ])
}

#[test]
fn filter_preserves_insertion_order() {
    let mut g = sample_gallery();
    assert_eq!(g.items().len(), 4);
    g.set_filter(Filter::Only(CategoryKind::Bridal));
    assert_eq!(g.filter(), Filter::Only(CategoryKind::Bridal));
    assert_eq!(g.visible_indices(), vec![0, 2]);
    g.set_filter(Filter::All);
    assert_eq!(g.visible_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn category_kind_parsing_rejects_unknown_values() {
    assert_eq!("editorial".parse::<CategoryKind>(), Ok(CategoryKind::Editorial));
    assert_eq!("stage".parse::<CategoryKind>(), Ok(CategoryKind::Stage));
    assert_eq!(
        "portrait".parse::<CategoryKind>(),
        Err(Error::UnknownCategory("portrait".into()))
    );
}

#[test]
fn detail_lines_dispatch_on_the_variant() {
    let stage = Category::Stage {
        production: "Giselle".into(),
        role: "Myrtha".into(),
    };
    assert_eq!(stage.detail(), "Giselle (Myrtha)");
    let bridal = Category::Bridal {
        venue: "Villa Aurelia".into(),
    };
    assert_eq!(bridal.detail(), "Bridal, Villa Aurelia");
    assert_eq!(bridal.kind(), CategoryKind::Bridal);
}

#[test]
fn modal_steps_wrap_within_the_filtered_subset() {
    let mut g = sample_gallery();
    g.set_filter(Filter::Only(CategoryKind::Bridal));
    assert!(g.open_modal(2));
    g.modal_step(SwipeDirection::Forward);
    assert_eq!(g.modal_index(), Some(0));
    g.modal_step(SwipeDirection::Backward);
    assert_eq!(g.modal_index(), Some(2));
}

#[test]
fn modal_refuses_hidden_and_out_of_range_items() {
    let mut g = sample_gallery();
    g.set_filter(Filter::Only(CategoryKind::Bridal));
    assert!(!g.open_modal(1), "editorial item is filtered out");
    assert!(!g.open_modal(99));
    assert_eq!(g.modal_index(), None);
}

#[test]
fn changing_the_filter_clears_a_hidden_modal_selection() {
    let mut g = sample_gallery();
    assert!(g.open_modal(1));
    g.set_filter(Filter::Only(CategoryKind::Bridal));
    assert_eq!(g.modal_index(), None);
    // a selection that survives the filter stays put
    assert!(g.open_modal(0));
    g.set_filter(Filter::All);
    assert_eq!(g.modal_index(), Some(0));
}

#[test]
fn empty_gallery_renders_nothing_navigable() {
    let mut g = Gallery::new(Vec::new());
    assert!(g.visible_indices().is_empty());
    assert!(!g.open_modal(0));
    g.modal_step(SwipeDirection::Forward);
    assert_eq!(g.modal_index(), None);
    assert!(g.modal_item().is_none());
}
