pub mod domain;
pub mod encoding;
pub mod error;
pub mod export;
pub mod group;
pub mod report;

pub use domain::{OTHER_OR_LOCAL, extract_domain};
pub use encoding::TextEncoding;
pub use error::{GroupError, Result};
pub use export::{LoadedExport, load_entries};
pub use group::{DomainGroup, group_entries};
pub use report::{ReportFormat, render, render_json, render_text};
