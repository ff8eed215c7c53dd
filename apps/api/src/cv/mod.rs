// CV pipeline: upload bytes -> text (TextSource) -> three-pass keyword
// extraction against the catalog -> ParsedCv. No format-specific parsing;
// every upload is decoded as plain text.

pub mod extractor;
pub mod handlers;
pub mod sections;
pub mod source;
pub mod tables;

pub use extractor::ParsedCv;
pub use source::{parse_cv, UploadedFile};
