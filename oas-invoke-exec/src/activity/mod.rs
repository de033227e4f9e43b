//! Host registration boundary: one invokable activity per discovered specification.

mod catalog;
mod descriptor;
mod input;
mod invoke;

pub use catalog::{ActivityCatalog, ActivityEntry, ActivityProvider, CatalogFailure};
pub use descriptor::{
    describe, normalize_name, ActivityDescriptor, InputDescriptor, OutputDescriptor, SelectOption,
    CATEGORY, OUTCOME_DONE, OUTCOME_ERROR,
};
pub use input::ActivityInput;
pub use invoke::OpenApiActivity;
