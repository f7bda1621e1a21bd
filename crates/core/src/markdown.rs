//! Markdown processing for notice regions flagged with `markdown="1"`.
//!
//! Mirrors how kramdown treats block HTML carrying that attribute: the
//! element's content is parsed as markdown and the attribute is dropped
//! from the output.

use std::sync::OnceLock;

use comrak::{Options, markdown_to_html};
use regex::Regex;
use tracing::debug;

use crate::notice::NoticeKind;

const CLOSE: &str = "</aside>";

fn open_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"<aside class="notice (standard|info|warning|success|error)" markdown="1">\n?"#,
        )
        .unwrap_or_else(|e| panic!("static notice marker regex is invalid: {e}"))
    })
}

/// Offset of the `</aside>` closing the element whose body starts at `s`,
/// skipping over nested asides.
fn find_matching_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < s.len() {
        let rest = &s[pos..];
        let next_open = rest.find("<aside");
        let next_close = rest.find(CLOSE)?;
        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos += o + "<aside".len();
            }
            _ => {
                if depth == 0 {
                    return Some(pos + next_close);
                }
                depth -= 1;
                pos += next_close + CLOSE.len();
            }
        }
    }
    None
}

/// Whether an unconverted marker before `pos` has its region span `pos`.
fn encloses(html: &str, pos: usize) -> bool {
    open_marker().find_iter(&html[..pos]).any(|m| {
        find_matching_close(&html[m.end()..]).is_some_and(|close| m.end() + close > pos)
    })
}

/// Render the body of every `markdown="1"` notice as markdown.
///
/// Regions are handled innermost first, so a notice nested inside another
/// is converted before its parent's body is parsed. A marker without a
/// closing `</aside>` is left as is.
pub fn process_markdown_regions(html: &str) -> String {
    let mut options = Options::default();
    options.render.unsafe_ = true; // notice bodies may carry raw HTML

    let mut out = html.to_string();
    // Markers at or past this offset are already handled.
    let mut limit = out.len();

    loop {
        let found = open_marker().captures_iter(&out[..limit]).last().and_then(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), whole.end(), caps[1].parse::<NoticeKind>().ok()))
        });
        let Some((open_start, body_start, kind)) = found else {
            break;
        };
        limit = open_start;

        let (Some(kind), Some(close_rel)) = (kind, find_matching_close(&out[body_start..]))
        else {
            continue;
        };

        let body_end = body_start + close_rel;
        let mut region_end = body_end + CLOSE.len();
        if out[region_end..].starts_with('\n') {
            region_end += 1;
        }

        let rendered = markdown_to_html(&out[body_start..body_end], &options);
        debug!(%kind, body_len = body_end - body_start, "rendered markdown notice region");

        let mut replacement = format!("<aside class=\"notice {kind}\">\n{rendered}</aside>\n");
        if encloses(&out, open_start) {
            // The parent body is markdown too: the converted aside must stand
            // as its own HTML block, fenced by blank lines.
            if !out[..open_start].trim_end_matches([' ', '\t']).ends_with("\n\n") {
                replacement.insert_str(0, "\n\n");
            }
            replacement.push('\n');
        }
        out.replace_range(open_start..region_end, &replacement);
    }

    out
}
