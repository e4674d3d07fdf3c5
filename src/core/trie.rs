// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), terminal: false }
    }
}

/// An arena-backed prefix trie over code points.
/// Node 0 is the root; every inserted cluster ends on a terminal node.
/// The arena is only ever built through `insert`, so every child index
/// points inside it.
#[derive(Clone, Debug)]
pub struct EmojiTrie {
    nodes: Vec<TrieNode>,
}

impl Default for EmojiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Inserts a cluster and reports whether it was new. Empty strings are
    /// ignored so a match always consumes at least one code point.
    /// O(k) complexity where k is the cluster length in code points.
    pub fn insert(&mut self, cluster: &str) -> bool {
        if cluster.is_empty() {
            return false;
        }
        let mut node_idx = 0;
        for c in cluster.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        let added = !self.nodes[node_idx].terminal;
        self.nodes[node_idx].terminal = true;
        added
    }

    /// Exact membership.
    pub fn contains(&self, cluster: &str) -> bool {
        let mut node_idx = 0;
        for c in cluster.chars() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        node_idx != 0 && self.nodes[node_idx].terminal
    }

    /// Returns the byte length of the longest inserted cluster that is a
    /// prefix of `text`, or `None` if no cluster starts there.
    ///
    /// Walking down the trie and remembering the last terminal node gives the
    /// same answer as testing every candidate length from longest to shortest,
    /// without building the candidate strings.
    pub fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut node_idx = 0;
        let mut best = None;
        for (offset, c) in text.char_indices() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if self.nodes[node_idx].terminal {
                best = Some(offset + c.len_utf8());
            }
        }
        best
    }

    /// Every inserted cluster, rebuilt from the paths to terminal nodes.
    /// Sorted, so the output does not depend on hash order.
    pub fn clusters(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![(0, String::new())];
        while let Some((node_idx, prefix)) = stack.pop() {
            let node = &self.nodes[node_idx];
            if node.terminal {
                out.push(prefix.clone());
            }
            for (&c, &child_idx) in &node.children {
                let mut next = prefix.clone();
                next.push(c);
                stack.push((child_idx, next));
            }
        }
        out.sort_unstable();
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
