//! Text cleaning shared by every prediction path.

pub mod normalizer;
pub mod stopwords;
pub mod validation;

pub use normalizer::TextNormalizer;
pub use stopwords::{StopwordError, Stopwords};
pub use validation::{combine_title_content, is_valid_input};
