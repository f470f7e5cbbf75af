//! PR templates, team guidelines, and review conventions
//!
//! Everything the review side of the server serves: the fixed template
//! registry with its on-disk store, free-form guideline documents, the
//! change-type suggestion table, and the static review-process policy.

pub mod error;
pub mod templates;
pub mod guidelines;
pub mod suggest;
pub mod process;

pub use error::{Error, Result};
pub use templates::{Template, TemplateStore, TEMPLATE_REGISTRY};
pub use guidelines::GuidelineStore;
pub use suggest::{suggest, template_for_change_type, Suggestion, USAGE_HINT};
pub use process::ReviewProcess;
