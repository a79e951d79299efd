pub mod geometry;
pub mod scores;
pub mod types;

pub use geometry::RadialMapper;
pub use scores::{
    DEFAULT_EMOTION_LABELS, DEFAULT_MAX_VALUE, ScoreModel, clamp_score, default_emotion_labels,
};
pub use types::{Point, Viewport};
