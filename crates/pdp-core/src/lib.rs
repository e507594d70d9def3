//! Domain types and view-state logic for the product detail page.
//!
//! Everything in this crate is pure: no rendering, no I/O, no browser
//! dependencies. The application crate projects this state into the DOM,
//! and the client crate feeds it with fetched products.
//!
//! - **Product**: the externally sourced record, with fallback accessors
//!   and pricing math
//! - **Gallery**: the derived image list shown by the gallery and lightbox
//! - **View state**: selected image, quantity, favorite, lightbox visibility
//! - **Lifecycle**: the Loading/Loaded/NotFound fetch state machine with a
//!   stale-response guard

pub mod error;
pub mod gallery;
pub mod ids;
pub mod lifecycle;
pub mod product;
pub mod view;

pub use error::CatalogError;
pub use gallery::{derive_images, PLACEHOLDER_IMAGE};
pub use ids::ProductId;
pub use lifecycle::{FetchPhase, FetchTicket, ProductFetch};
pub use product::{discount_percent, format_price, savings, Product};
pub use view::{QuantityChange, StepDirection, ViewState};
