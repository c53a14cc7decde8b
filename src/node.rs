use crate::{Child, NodeMeta, ParseNode, Token};
use ptree::TreeItem;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

impl Child {
    /// The verbatim text this child contributes to its parent.
    pub fn text(&self) -> &str {
        match self {
            Child::Token(token) => &token.text,
            Child::Node(node) => &node.text,
        }
    }

    pub fn as_node(&self) -> Option<&ParseNode> {
        match self {
            Child::Node(node) => Some(node),
            Child::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Child::Token(token) => Some(token),
            Child::Node(_) => None,
        }
    }
}

impl ParseNode {
    pub(crate) fn empty(name: &'static str) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
            meta: NodeMeta::None,
        }
    }

    pub(crate) fn push_token(&mut self, token: Token) {
        self.text.push_str(&token.text);
        self.children.push(Child::Token(token));
    }

    pub(crate) fn push_node(&mut self, node: ParseNode) {
        self.text.push_str(&node.text);
        self.children.push(Child::Node(node));
    }

    /// Drop children past `keep` and rebuild the verbatim text from what remains. Used by the
    /// driver's checkpoint rollback.
    pub(crate) fn truncate(&mut self, keep: usize) {
        self.children.truncate(keep);
        self.text = self.children.iter().map(Child::text).collect();
    }

    /// Direct child nodes built by the named production.
    pub fn child_nodes<'n>(&'n self, name: &'static str) -> impl Iterator<Item = &'n ParseNode> {
        self.children
            .iter()
            .filter_map(Child::as_node)
            .filter(move |node| node.name == name)
    }

    /// First nested node (self included) built by the named production.
    pub fn find(&self, name: &str) -> Option<&ParseNode> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Child::as_node)
            .find_map(|node| node.find(name))
    }

    /// Whether any nested node (self included) was built by the named production.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Print the tree to stdout, one branch per child.
    pub fn print(&self) -> std::io::Result<()> {
        ptree::print_tree(&Child::Node(self.clone()))
    }
}

impl Display for ParseNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.text)
    }
}

impl TreeItem for Child {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        match self {
            Child::Token(token) => write!(f, "{}", token),
            Child::Node(node) => match &node.meta {
                NodeMeta::None => write!(f, "{}", node.name),
                meta => write!(f, "{} {:?}", node.name, meta),
            },
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            Child::Token(_) => Cow::from(&[][..]),
            Child::Node(node) => Cow::from(&node.children),
        }
    }
}
