use crate::ast::{Document, Node, Quote};
use crate::lexer::{Lexer, Token, CLOSE_TAG};
use crate::serialize::{open_tag, write_nodes};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Ceiling for `max_depth`; documents are walked recursively.
pub const MAX_DEPTH_LIMIT: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Opening tags nested deeper than this are kept as literal text.
    /// Values above `MAX_DEPTH_LIMIT` are clamped.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

struct Frame {
    author: String,
    nodes: Vec<Node>,
}

struct ParserState {
    options: ParseOptions,
    root: Vec<Node>,
    stack: Vec<Frame>,
    // opening tags dropped by the depth guard whose closing tag is still pending
    suppressed: usize,
}

pub fn parse(input: &str) -> Document {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses a post body. Malformed markup is kept as text, so this never fails.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Document {
    let mut state = ParserState::new(ParseOptions {
        max_depth: options.max_depth.min(MAX_DEPTH_LIMIT),
    });
    for token in Lexer::new(input) {
        match token {
            Token::Text(text) => state.handle_text(text),
            Token::Open(author) => state.handle_open(author),
            Token::Close => state.handle_close(),
        }
    }
    let doc = state.finish();
    trace!(
        "Parse: len={}, nodes={}, quotes={}, depth={}",
        input.len(),
        doc.len(),
        doc.quote_count(),
        doc.depth()
    );
    doc
}

impl ParserState {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            root: Vec::new(),
            stack: Vec::new(),
            suppressed: 0,
        }
    }

    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.nodes,
            None => &mut self.root,
        }
    }

    fn handle_text(&mut self, text: &str) {
        push_text(self.current(), text);
    }

    fn handle_open(&mut self, author: &str) {
        if self.stack.len() >= self.options.max_depth {
            debug!(
                "Parse: quote by {:?} exceeds max_depth={}, kept as text",
                author, self.options.max_depth
            );
            self.suppressed += 1;
            let tag = open_tag(author);
            push_text(self.current(), &tag);
            return;
        }
        self.stack.push(Frame {
            author: author.to_string(),
            nodes: Vec::new(),
        });
    }

    fn handle_close(&mut self) {
        if self.suppressed > 0 {
            self.suppressed -= 1;
            push_text(self.current(), CLOSE_TAG);
            return;
        }
        match self.stack.pop() {
            Some(frame) => {
                let quote = Node::Quote(Quote {
                    author: frame.author,
                    body: Document::new(frame.nodes),
                });
                self.current().push(quote);
            }
            None => {
                debug!("Parse: unmatched {} kept as text", CLOSE_TAG);
                push_text(self.current(), CLOSE_TAG);
            }
        }
    }

    // Unclosed frames form a chain ending at the innermost one; each is
    // flattened to its literal markup after the parent's content.
    fn finish(mut self) -> Document {
        if !self.stack.is_empty() {
            let mut tail = String::new();
            for frame in self.stack.drain(..) {
                debug!("Parse: unclosed quote by {:?} kept as text", frame.author);
                tail.push_str(&open_tag(&frame.author));
                write_nodes(&frame.nodes, &mut tail);
            }
            push_text(&mut self.root, &tail);
        }
        Document::new(self.root)
    }
}

// Keeps adjacent text merged into one node.
fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}
