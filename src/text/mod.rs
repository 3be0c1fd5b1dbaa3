//! Text normalization and section segmentation.

mod normalize;
mod segment;

pub use normalize::normalize;
pub use segment::{
    DuplicateHeadings, HeadingDetector, KeywordGroup, SectionMap, Segmenter,
    FUZZY_HEADING_THRESHOLD,
};
