//! Indentation tree.
//!
//! One leading space per nesting level. A line is `key content...`; the
//! key is the first space-delimited word. Children keep their own deeper
//! indentation relative to the parent, so code samples survive a
//! parse/serialize cycle unchanged.

use crate::store::AttributeStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    line: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            children: Vec::new(),
        }
    }

    /// Parse a tree. Never fails: every line lands somewhere.
    pub fn parse(text: &str) -> Self {
        let lines = resolve_depths(text);
        let mut pos = 0;
        Self {
            line: String::new(),
            children: build(&lines, &mut pos, 0),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn key(&self) -> &str {
        self.line.split(' ').next().unwrap_or("")
    }

    /// Everything after the key, or `None` when the line is a bare key.
    pub fn content(&self) -> Option<&str> {
        self.line.split_once(' ').map(|(_, rest)| rest)
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.line.split(' ').nth(index)
    }

    pub fn words_from(&self, index: usize) -> String {
        self.line.split(' ').skip(index).collect::<Vec<_>>().join(" ")
    }

    /// Direct children with the given key, in source order.
    pub fn find_nodes<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a Node> + 'k
    where
        'a: 'k,
    {
        self.children.iter().filter(move |child| child.key() == key)
    }

    /// Last direct child with the given key.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children.iter().rev().find(|child| child.key() == key)
    }

    /// Serialize the children as a standalone tree (depth 0).
    pub fn children_to_string(&self) -> String {
        let mut lines = Vec::new();
        for child in &self.children {
            child.write_lines(0, &mut lines);
        }
        lines.join("\n")
    }

    /// Serialize this node and its subtree.
    pub fn to_tree_string(&self) -> String {
        let mut lines = Vec::new();
        self.write_lines(0, &mut lines);
        lines.join("\n")
    }

    fn write_lines(&self, depth: usize, out: &mut Vec<String>) {
        if self.line.is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("{}{}", " ".repeat(depth), self.line));
        }
        for child in &self.children {
            child.write_lines(depth + 1, out);
        }
    }
}

impl AttributeStore for Node {
    fn get_group(&self, path: &str) -> Option<&Node> {
        let mut current = self;
        for key in path.split(' ').filter(|k| !k.is_empty()) {
            current = current.child(key)?;
        }
        if std::ptr::eq(current, self) {
            None
        } else {
            Some(current)
        }
    }

    fn get_all_groups(&self, path: &str) -> Vec<&Node> {
        let (parent, key) = match path.rsplit_once(' ') {
            Some((parent, key)) => match self.get_group(parent) {
                Some(node) => (node, key),
                None => return Vec::new(),
            },
            None => (self, path),
        };
        parent.find_nodes(key).collect()
    }
}

/// Assign every line a depth no deeper than one past the previous line.
///
/// Extra leading spaces stay in the line text. Blank lines take the depth
/// of the next non-blank line so they stay inside indented blocks; blank
/// lines that would sit at the top level are dropped.
fn resolve_depths(text: &str) -> Vec<(usize, String)> {
    let raw: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let mut resolved: Vec<(usize, String)> = Vec::with_capacity(raw.len());
    let mut prev_depth: Option<usize> = None;

    for (i, line) in raw.iter().enumerate() {
        let max_depth = prev_depth.map_or(0, |d| d + 1);

        if line.trim().is_empty() {
            let next_depth = raw[i + 1..]
                .iter()
                .find(|l| !l.trim().is_empty())
                .map(|l| leading_spaces(l));
            let depth = match next_depth {
                Some(d) if d > 0 => d.min(max_depth),
                _ => continue,
            };
            if depth == 0 {
                continue;
            }
            resolved.push((depth, String::new()));
            prev_depth = Some(depth);
            continue;
        }

        let spaces = leading_spaces(line);
        let depth = spaces.min(max_depth);
        resolved.push((depth, line[depth..].to_string()));
        prev_depth = Some(depth);
    }
    resolved
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn build(lines: &[(usize, String)], pos: &mut usize, depth: usize) -> Vec<Node> {
    let mut nodes = Vec::new();
    while *pos < lines.len() && lines[*pos].0 == depth {
        let mut node = Node::new(lines[*pos].1.clone());
        *pos += 1;
        node.children = build(lines, pos, depth + 1);
        nodes.push(node);
    }
    nodes
}
