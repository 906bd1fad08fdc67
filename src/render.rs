use crate::ast::{Document, Node};
use crate::types::{Block, RenderOutput};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTRIBUTION: &str = "Originally posted by {author}:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Trim every text block and drop the ones left empty.
    pub trim_text: bool,
    /// Header shown above a quote; `{author}` is replaced by the author.
    pub attribution: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            trim_text: false,
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, doc: &Document) -> Vec<Block> {
        self.render_nodes(doc.nodes())
    }

    pub fn render_output(&self, doc: &Document) -> RenderOutput {
        RenderOutput {
            blocks: self.render(doc),
            quotes: doc.quote_count(),
            depth: doc.depth(),
        }
    }

    fn render_nodes(&self, nodes: &[Node]) -> Vec<Block> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text(text) => {
                    let text = if self.options.trim_text {
                        text.trim()
                    } else {
                        text.as_str()
                    };
                    if !text.is_empty() {
                        out.push(Block::text(text));
                    }
                }
                Node::Quote(q) => out.push(Block::Quote {
                    author: q.author.clone(),
                    attribution: self.attribution(&q.author),
                    blocks: self.render_nodes(q.body.nodes()),
                }),
            }
        }
        out
    }

    fn attribution(&self, author: &str) -> String {
        self.options.attribution.replace("{author}", author)
    }
}

pub fn render(doc: &Document) -> Vec<Block> {
    Renderer::new().render(doc)
}
