pub mod normalize;
pub mod registry;
pub mod weights;

pub use normalize::{RatingNormalizer, NORMALIZED_SCALE};
pub use registry::{Platform, PlatformRegistry};
pub use weights::{WeightEngine, WeightMap};
