pub mod bidi;
pub mod normalize;
pub mod segment;
pub mod shaping;
pub mod stopwords;

pub use bidi::{strip_emoji_and_isolates, to_visual};
pub use normalize::{Normalizer, NormalizerConfig};
pub use segment::{Segmenter, UnicodeSegmenter};
pub use shaping::reshape;
pub use stopwords::StopwordSet;
