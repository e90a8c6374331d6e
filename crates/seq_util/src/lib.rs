mod error;
mod reorder;
mod traits;

pub mod dynamic;
pub mod element;
pub mod quote;
pub mod sequence;

pub use element::{ElementDescriptor, ElementKind, MarkupRenderer, Render, create_hidden_field};
pub use error::{Result, SequenceError};
pub use quote::{Quoted, quote};
pub use reorder::Reorder;
pub use traits::Sequence;
