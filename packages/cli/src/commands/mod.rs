pub mod apply;
pub mod export;
pub mod init;
pub mod pages;

pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use pages::{pages, sections, PagesArgs, SectionsArgs};
