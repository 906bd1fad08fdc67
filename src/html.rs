//! HTML for rendered post bodies. Styling of the emitted classes belongs to
//! the page stylesheet.

use crate::types::Block;

pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    write_blocks(blocks, &mut out);
    out
}

fn write_blocks(blocks: &[Block], out: &mut String) {
    for block in blocks {
        match block {
            Block::Text { text } => {
                out.push_str("<div class=\"post-text\">");
                out.push_str(&escape_html(text));
                out.push_str("</div>");
            }
            Block::Quote {
                attribution,
                blocks,
                ..
            } => {
                out.push_str("<blockquote class=\"quote\">");
                out.push_str("<div class=\"quote-attribution\">");
                out.push_str(&escape_html(attribution));
                out.push_str("</div><div class=\"quote-body\">");
                write_blocks(blocks, out);
                out.push_str("</div></blockquote>");
            }
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
