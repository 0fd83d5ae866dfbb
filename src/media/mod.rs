//! Media loading widgets.

pub mod lazy_image;

pub use lazy_image::LazyImage;
