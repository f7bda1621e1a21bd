//! Registration of the notice blocks with a Liquid parser.

use std::sync::OnceLock;

use liquid::{Parser, ParserBuilder};
use tracing::debug;

use crate::error::RenderError;
use crate::notice::{NoticeBlock, NoticeKind};

static SHARED_PARSER: OnceLock<Parser> = OnceLock::new();

/// Kinds bound as block tags, in registration order.
pub fn registered_kinds() -> &'static [NoticeKind] {
    &NoticeKind::ALL
}

/// Bind every notice kind as a block tag on `builder`.
pub fn register_notice_blocks(builder: ParserBuilder) -> ParserBuilder {
    registered_kinds()
        .iter()
        .fold(builder, |builder, &kind| builder.block(NoticeBlock::new(kind)))
}

/// Build a parser with the Liquid standard library plus the notice blocks.
pub fn build_parser() -> Result<Parser, RenderError> {
    debug!(kinds = registered_kinds().len(), "building liquid parser with notice blocks");
    register_notice_blocks(ParserBuilder::with_stdlib())
        .build()
        .map_err(RenderError::Parser)
}

/// Process-wide parser, built on first use and read-only afterwards.
pub fn shared_parser() -> Result<&'static Parser, RenderError> {
    if let Some(parser) = SHARED_PARSER.get() {
        return Ok(parser);
    }
    let parser = build_parser()?;
    // A concurrent caller may have won the race; either parser is equivalent.
    Ok(SHARED_PARSER.get_or_init(|| parser))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_five_kinds() {
        let names: Vec<&str> = registered_kinds().iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["standard", "info", "warning", "success", "error"]);
    }

    #[test]
    fn shared_parser_is_built_once() {
        let a = shared_parser().unwrap();
        let b = shared_parser().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn bare_stdlib_parser_does_not_know_notice_tags() {
        let parser = ParserBuilder::with_stdlib().build().unwrap();
        assert!(parser.parse("{% info %}x{% endinfo %}").is_err());
    }
}
