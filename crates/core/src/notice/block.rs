use std::io::Write;

use liquid_core::error::{ResultLiquidExt, ResultLiquidReplaceExt};
use liquid_core::{BlockReflection, Language, ParseBlock, Renderable, Runtime, Template};
use liquid_core::{Result, TagBlock, TagTokenIter};

use super::{Notice, NoticeKind};

/// Liquid block tag bound to one notice kind.
///
/// One instance is registered per kind; the tag name is the kind name and
/// the closing tag is `end<kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeBlock {
    kind: NoticeKind,
}

impl NoticeBlock {
    pub fn new(kind: NoticeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }
}

impl BlockReflection for NoticeBlock {
    fn start_tag(&self) -> &str {
        self.kind.as_str()
    }

    fn end_tag(&self) -> &str {
        self.kind.end_tag()
    }

    fn description(&self) -> &str {
        "Wraps the block body in a styled notice aside."
    }
}

impl ParseBlock for NoticeBlock {
    // Arguments after the tag name are accepted and ignored.
    fn parse(
        &self,
        _arguments: TagTokenIter<'_>,
        mut tokens: TagBlock<'_, '_>,
        options: &Language,
    ) -> Result<Box<dyn Renderable>> {
        let kind = self.kind;
        let body = Template::new(
            tokens
                .parse_all(options)
                .trace_with(|| format!("{{% {kind} %}}").into())?,
        );
        tokens.assert_empty();

        Ok(Box::new(NoticeTemplate { kind, body }))
    }

    fn reflection(&self) -> &dyn BlockReflection {
        self
    }
}

#[derive(Debug)]
struct NoticeTemplate {
    kind: NoticeKind,
    body: Template,
}

impl Renderable for NoticeTemplate {
    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<()> {
        let mut inner = Vec::new();
        self.body
            .render_to(&mut inner, runtime)
            .trace_with(|| format!("{{% {} %}}", self.kind).into())?;
        let notice = Notice::new(self.kind, String::from_utf8_lossy(&inner));

        write!(writer, "{}", notice.render()).replace("Failed to render")?;
        Ok(())
    }
}
