//! Liquid block tags that wrap their content in styled notice asides.
//!
//! Five tags are provided, `standard`, `info`, `warning`, `success` and
//! `error`. Each renders as
//!
//! ```text
//! <aside class="notice warning" markdown="1">
//!  Disk almost full
//! </aside>
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod markdown;
pub mod notice;
pub mod registry;

pub use engine::{RenderOptions, globals_from_pairs, render_file, render_source};
pub use error::RenderError;
pub use notice::{Notice, NoticeBlock, NoticeKind, render_notice};
pub use registry::{build_parser, register_notice_blocks, registered_kinds, shared_parser};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
