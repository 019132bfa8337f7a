pub mod extractor;
pub mod registry;
pub mod types;

pub use extractor::extract;
pub use registry::{CLASS, DEF, Registry, VAR};
pub use types::{Declaration, DeclarationRecord, DeclarationType, FileLine};
