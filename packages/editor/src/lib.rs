//! # SiteBuilder Editor
//!
//! Editing engine for SiteBuilder pages: history-tracked mutations, the
//! reducer store, and the command façade a presentation layer drives.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ presentation: reads state, calls commands   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: EditSession command façade         │
//! │  - one method per user command              │
//! │  - drag-and-drop as a local value           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ post_effects + store: Action → next state   │
//! │  - mutations validated, then committed      │
//! │  - snapshot history with undo/redo          │
//! │  - rename propagation across pages          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ schema: Page / Section / Component          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots, not diffs**: history stores whole pages, so undo is exact
//! 2. **No-op over error**: stale IDs never surface to the caller
//! 3. **Injected state**: sessions are constructed with their pages and
//!    config; nothing is global
//!
//! ## Usage
//!
//! ```rust
//! use sitebuilder_editor::{EditSession, EditorConfig};
//! use sitebuilder_schema::templates;
//!
//! let mut session = EditSession::with_default_site(EditorConfig::default());
//! let first = session.current_page().sections[0].id.clone();
//!
//! session.duplicate_section(&first);
//! assert_eq!(session.current_page().sections.len(), 5);
//!
//! session.undo();
//! assert_eq!(session.current_page().sections.len(), 4);
//!
//! session.create_page(templates::privacy_page());
//! assert_eq!(session.current_page().slug, "/privacy");
//! ```

mod config;
mod drag;
mod errors;
mod export;
mod history;
mod mutations;
mod post_effects;
mod session;
mod store;
mod ui_state;

pub use config::EditorConfig;
pub use drag::SectionDrag;
pub use errors::EditorError;
pub use export::{export_file_name, export_page, import_page, read_page, write_export};
pub use history::History;
pub use mutations::{Mutation, MutationError};
pub use post_effects::{ClearStaleSelection, PostEffect, PostEffectEngine, PropagatePageRename};
pub use session::EditSession;
pub use store::{reduce, Action, BuilderState};
pub use ui_state::{clamp_zoom, EditMode, EditorUiState, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

// Re-export schema types for convenience
pub use sitebuilder_schema::{Page, Section};
