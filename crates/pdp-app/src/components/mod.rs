//! Detail-view components. Each is a thin projection of `pdp-core` state.

mod features;
mod gallery;
mod lightbox;
mod pricing;
mod quantity;
mod skeleton;
mod specs;
mod toast;

pub use features::FeatureBadges;
pub use gallery::Gallery;
pub use lightbox::Lightbox;
pub use pricing::Pricing;
pub use quantity::QuantityStepper;
pub use skeleton::ProductSkeleton;
pub use specs::SpecTable;
pub use toast::Toast;
