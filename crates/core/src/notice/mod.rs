//! Notice callouts: the kind enum, the wrapper markup and the Liquid block.

pub mod block;
pub mod kind;

pub use block::NoticeBlock;
pub use kind::{NoticeKind, UnknownKind};

/// A single rendered notice. Lives for one render call only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub body: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, body: impl Into<String>) -> Self {
        Self { kind, body: body.into() }
    }

    pub fn render(&self) -> String {
        render_notice(self.kind, &self.body)
    }
}

/// Wrap already-evaluated content in a notice aside.
///
/// The body goes on its own line after a single space, and neither the
/// kind nor the body is escaped. The `markdown="1"` attribute tells the
/// markdown pass (see [`crate::markdown`]) to treat the body as markdown.
pub fn render_notice(kind: NoticeKind, body: &str) -> String {
    format!("<aside class=\"notice {kind}\" markdown=\"1\">\n {body}\n</aside>\n")
}
