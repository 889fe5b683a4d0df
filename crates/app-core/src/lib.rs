pub mod carousel;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod parallax;
pub mod petals;
pub mod scroll;
pub mod transform;

pub use carousel::*;
pub use constants::*;
pub use error::*;
pub use gallery::*;
pub use gesture::*;
pub use parallax::*;
pub use petals::*;
pub use scroll::*;
pub use transform::*;
