pub mod backend;
pub mod config;
pub mod model;

pub use backend::{BackendError, PdfBackend};
pub use config::LayoutConfig;
pub use model::{BBox, Block, BlockKind, Line, PageContent, Span};
