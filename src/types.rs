use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RenderOutput {
    pub blocks: Vec<Block>,
    pub quotes: usize,
    pub depth: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        text: String,
    },
    Quote {
        author: String,
        attribution: String,
        blocks: Vec<Block>,
    },
}

impl Block {
    pub fn text(t: impl Into<String>) -> Self {
        Block::Text { text: t.into() }
    }
}
