//! Contact form logic: field validation and mailto link building.

mod mailto;
mod validate;

pub use mailto::mailto_link;
pub use validate::{validate_field, FormField};
