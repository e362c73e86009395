//! Browser-independent core of the block carousel.
//!
//! [`CatalogClient`] fetches the catalog once, [`CarouselController`] turns it
//! into [`DisplayItem`]s and keeps the visible block in bounds while a
//! [`StripRenderer`] draws the result.

pub mod client;
pub mod controller;
pub mod display;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod renderer;

pub use client::CatalogClient;
pub use controller::CarouselController;
pub use display::DisplayItem;
pub use error::ClientError;
pub use layout::{ControlState, StripLayout, Transition};
pub use navigation::{BlockChange, Cursor, NavControl};
pub use renderer::StripRenderer;
