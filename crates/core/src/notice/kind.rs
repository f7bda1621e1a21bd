use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown notice kind '{0}' (expected one of: standard, info, warning, success, error)")]
pub struct UnknownKind(pub String);

/// The closed set of notice flavours a block tag can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Standard,
    Info,
    Warning,
    Success,
    Error,
}

impl NoticeKind {
    /// Every kind, in registration order.
    pub const ALL: [NoticeKind; 5] = [
        NoticeKind::Standard,
        NoticeKind::Info,
        NoticeKind::Warning,
        NoticeKind::Success,
        NoticeKind::Error,
    ];

    /// Tag name, also used as the CSS modifier class.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Standard => "standard",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    pub fn end_tag(self) -> &'static str {
        match self {
            NoticeKind::Standard => "endstandard",
            NoticeKind::Info => "endinfo",
            NoticeKind::Warning => "endwarning",
            NoticeKind::Success => "endsuccess",
            NoticeKind::Error => "enderror",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoticeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
