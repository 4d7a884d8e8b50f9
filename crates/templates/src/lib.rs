//! Path templates: the mapping between structured field sets and
//! filesystem paths.
//!
//! The engine treats templating as an external service behind the
//! [`Template`] trait — publish destinations are computed with
//! `apply_fields`, work files are recognized with `validate` /
//! `fields_from_path`, and existing versions are discovered with
//! `paths_on_disk`. [`TokenTemplate`] is the standard `{token}`-pattern
//! implementation; tests and shells may substitute their own.

pub mod fields;
pub mod key;
pub mod name;
pub mod template;
pub mod token;
pub mod versions;

// Re-export primary types for convenience.
pub use fields::{FieldMap, FieldValue};
pub use key::{KeyKind, TemplateKey};
pub use name::publish_name;
pub use template::{Template, TemplateError, TemplateResolver, TemplateSet};
pub use token::TokenTemplate;
pub use versions::next_available_version;
