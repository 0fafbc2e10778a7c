pub mod feature_encoder;
pub mod flat_index;

pub use feature_encoder::{encode, Encoding, FeatureSchema, FeatureVector};
pub use flat_index::{FlatIndex, Neighbor};
