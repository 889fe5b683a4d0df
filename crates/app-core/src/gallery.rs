//! Portfolio gallery: typed categories, filtering, and the modal viewer's
//! index state. Media is opaque here; the core never loads it.

use crate::error::{Error, Result};
use crate::gesture::SwipeDirection;
use std::str::FromStr;

/// Media backing a portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaRef {
    Image { src: String, alt: String },
    Video { src: String, poster: String },
}

/// Portfolio categories, each carrying its own typed metadata. Rendering
/// dispatches by matching on the variant, never by comparing strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Bridal { venue: String },
    Editorial { publication: String, issue: String },
    Stage { production: String, role: String },
    Beauty { technique: String },
}

/// Fieldless discriminant used by the filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryKind {
    Bridal,
    Editorial,
    Stage,
    Beauty,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Bridal { .. } => CategoryKind::Bridal,
            Category::Editorial { .. } => CategoryKind::Editorial,
            Category::Stage { .. } => CategoryKind::Stage,
            Category::Beauty { .. } => CategoryKind::Beauty,
        }
    }

    /// Caption detail line rendered under the modal image.
    pub fn detail(&self) -> String {
        match self {
            Category::Bridal { venue } => format!("Bridal, {venue}"),
            Category::Editorial { publication, issue } => format!("{publication} {issue}"),
            Category::Stage { production, role } => format!("{production} ({role})"),
            Category::Beauty { technique } => technique.clone(),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = Error;

    /// Parse the `data-category` attribute value used in the markup.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bridal" => Ok(CategoryKind::Bridal),
            "editorial" => Ok(CategoryKind::Editorial),
            "stage" => Ok(CategoryKind::Stage),
            "beauty" => Ok(CategoryKind::Beauty),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Filter applied to the gallery grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(CategoryKind),
}

/// One gallery entry; immutable once loaded, display order = insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub media: MediaRef,
    pub caption: String,
    pub category: Category,
}

/// Gallery grid plus the modal viewer's selection.
#[derive(Debug, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    filter: Filter,
    modal: Option<usize>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            filter: Filter::All,
            modal: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[inline]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Apply a filter. If the open modal item is filtered out by the change,
    /// the modal selection is cleared with it.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if let Some(i) = self.modal {
            if !self.is_visible(i) {
                self.modal = None;
            }
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        match self.items.get(index) {
            None => false,
            Some(item) => match self.filter {
                Filter::All => true,
                Filter::Only(kind) => item.category.kind() == kind,
            },
        }
    }

    /// Indices passing the current filter, in insertion order.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&i| self.is_visible(i))
            .collect()
    }

    /// Open the modal on an item. Hidden or out-of-range indices are
    /// refused (defensive no-op, not an error).
    pub fn open_modal(&mut self, index: usize) -> bool {
        if !self.is_visible(index) {
            return false;
        }
        self.modal = Some(index);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    #[inline]
    pub fn modal_index(&self) -> Option<usize> {
        self.modal
    }

    pub fn modal_item(&self) -> Option<&GalleryItem> {
        self.modal.and_then(|i| self.items.get(i))
    }

    /// Step the modal through the currently visible items, wrapping.
    pub fn modal_step(&mut self, direction: SwipeDirection) {
        let Some(current) = self.modal else {
            return;
        };
        let visible = self.visible_indices();
        let Some(pos) = visible.iter().position(|&i| i == current) else {
            return;
        };
        let n = visible.len();
        let next = match direction {
            SwipeDirection::Forward => (pos + 1) % n,
            SwipeDirection::Backward => (pos + n - 1) % n,
        };
        self.modal = Some(visible[next]);
    }
}
