pub mod assembler;
pub mod batch;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod fragment;
pub mod hash;
pub mod pool;
pub mod selector;

pub use assembler::{get_content, Content, ContentRecord, Review, ReviewSet};
pub use batch::assemble_batch;
pub use catalog::ContentPools;
pub use entity::{EntityKey, EntityKind};
pub use error::VariationError;
pub use fragment::Fragment;
pub use pool::Pool;
