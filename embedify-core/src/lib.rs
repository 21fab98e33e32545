#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod expand;
pub mod fetch;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod operations;
pub mod output;
pub mod reference;
pub mod resolve;

pub use expand::{expand, EnvOverrides};
pub use fetch::materialize;
pub use generate::{
    apply_template, detect_package_name, plan_layout, render_source, AssetLayout, EmbedEntry,
};
pub use manifest::{Manifest, MANIFEST_NAME};
pub use naming::{to_identifier, NamingError, Style};
pub use operations::generate_operation;
pub use output::{
    GenerateResult, GeneratedEntry, OutputFormat, OutputFormatter, VersionResult,
};
pub use reference::FileReference;
pub use resolve::{resolve_unique_names, resolve_unique_paths};
