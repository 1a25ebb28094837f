//! The block structure of an HCL document.

mod de;
mod from;

use crate::value::{Map, Value};

/// The top-level blocks of an HCL document.
pub type Body = Vec<Block>;

/// A single HCL block: a block path, ordered attributes and nested child
/// blocks.
///
/// The block path identifies the block keyword and its labels, e.g.
/// `["resource", "aws_instance", "web"]`. Attributes are emitted in insertion
/// order, children in the given order. Compilation borrows the block and
/// never mutates it.
///
/// ```
/// use hclgen::{Block, Variable};
///
/// let block = Block::new(["resource", "aws_instance", "web"])
///     .attribute("ami", "ami-0c55b159cbfafe1f0")
///     .attribute("instance_type", Variable::new("instance_type"))
///     .child(Block::new(["lifecycle"]).attribute("create_before_destroy", true));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    path: Vec<String>,
    attributes: Map<String, Value>,
    children: Vec<Block>,
}

impl Block {
    /// Creates a block with the given block path.
    ///
    /// The path must contain at least the block keyword; this is validated
    /// when the block is compiled, not on construction.
    pub fn new<I, T>(path: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, preserving insertion order. Setting an existing key
    /// replaces its value without changing its position.
    pub fn attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a nested child block.
    pub fn child(mut self, block: Block) -> Self {
        self.children.push(block);
        self
    }

    /// The full block path: keyword followed by labels.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The block keyword, i.e. the first block path element.
    pub fn ident(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// The block labels, i.e. every block path element after the first.
    pub fn labels(&self) -> &[String] {
        self.path.get(1..).unwrap_or_default()
    }

    /// Iterates over the attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up an attribute value by key.
    pub fn get_attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The nested child blocks, in order.
    pub fn children(&self) -> &[Block] {
        &self.children
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_accessors() {
        let block = Block::new(["resource", "aws_instance", "web"]);

        assert_eq!(block.ident(), Some("resource"));
        assert_eq!(block.labels(), &["aws_instance", "web"]);

        let block = Block::new(["terraform"]);

        assert_eq!(block.ident(), Some("terraform"));
        assert!(block.labels().is_empty());

        let block = Block::new(Vec::<String>::new());

        assert_eq!(block.ident(), None);
    }

    #[test]
    fn attribute_order_preserved() {
        let block = Block::new(["variable", "env"])
            .attribute("b", 2)
            .attribute("a", 1)
            .attribute("c", 3);

        let keys: Vec<&str> = block.attributes().map(|(k, _)| k).collect();

        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn attribute_replaces_in_place() {
        let block = Block::new(["module", "vpc"])
            .attribute("source", "./modules/vpc")
            .attribute("cidr", "10.0.0.0/16")
            .attribute("source", "./modules/vpc-v2");

        let keys: Vec<&str> = block.attributes().map(|(k, _)| k).collect();

        assert_eq!(keys, ["source", "cidr"]);
        assert_eq!(
            block.get_attribute("source"),
            Some(&Value::from("./modules/vpc-v2"))
        );
    }
}
