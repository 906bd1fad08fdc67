use crate::ast::{Document, Node};
use crate::lexer::{CLOSE_TAG, OPEN_TAG};

/// Canonical markup for a document. Text is written verbatim, so
/// `serialize(&parse(s)) == s` for any parsed `s`.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_nodes(doc.nodes(), &mut out);
    out
}

/// Reply-box prefill for quoting a post. An author name ends at the first
/// `]`, so any `]` in `author` is dropped to keep the prefill parseable.
pub fn quote_reply(author: &str, content: &str) -> String {
    let author = author.replace(']', "");
    format!("{}{}{}\n\n", open_tag(&author), content, CLOSE_TAG)
}

pub(crate) fn open_tag(author: &str) -> String {
    format!("{}{}]", OPEN_TAG, author)
}

pub(crate) fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Quote(q) => {
                out.push_str(&open_tag(&q.author));
                write_nodes(q.body.nodes(), out);
                out.push_str(CLOSE_TAG);
            }
        }
    }
}
