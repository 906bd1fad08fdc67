use std::fmt;

/// Parsed markup tree of one post body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Quote(Quote),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub author: String, // raw text between "[QUOTE=" and "]"
    pub body: Document,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest quote nesting in the document; 0 when there are no quotes.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Text(_) => 0,
                Node::Quote(q) => 1 + q.body.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Number of quote nodes at any depth.
    pub fn quote_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Text(_) => 0,
                Node::Quote(q) => 1 + q.body.quote_count(),
            })
            .sum()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::serialize(self))
    }
}

impl Node {
    pub fn text(t: impl Into<String>) -> Self {
        Node::Text(t.into())
    }

    pub fn quote(author: impl Into<String>, body: Vec<Node>) -> Self {
        Node::Quote(Quote {
            author: author.into(),
            body: Document::new(body),
        })
    }
}
