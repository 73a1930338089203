/// Analysis: file classification and post-scan summary statistics.

pub mod categorizer;
pub mod summary;

pub use categorizer::{categorize, Category};
pub use summary::{summarize, summarize_top, Summary, TOP_LARGEST};
