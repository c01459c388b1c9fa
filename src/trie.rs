//! Dictionary index used to prune the grid search.
//!
//! The trie is stored as a flat arena of nodes. Each node keeps a fixed
//! table of children for `a..=z` plus a small sparse list for any other
//! character, so descending is a constant-time lookup in the common case.

use crate::MIN_INDEXED_LEN;
use log::info;

/// Index of a node in the trie arena. The root is always `NodeId::ROOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = Self(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

const ALPHABET: usize = 26;

#[derive(Debug, Clone, Default)]
struct Node {
    letters: [Option<NodeId>; ALPHABET],
    other: Vec<(char, NodeId)>,
    terminal: bool,
}

impl Node {
    fn child(&self, c: char) -> Option<NodeId> {
        if c.is_ascii_lowercase() {
            self.letters[(c as u8 - b'a') as usize]
        } else {
            self.other
                .iter()
                .find_map(|&(ch, id)| (ch == c).then_some(id))
        }
    }

    /// Children in label order, `a..=z` first.
    fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.letters
            .iter()
            .zip('a'..='z')
            .filter_map(|(&id, c)| id.map(|id| (c, id)))
            .chain(self.other.iter().copied())
    }

    fn set_child(&mut self, c: char, id: NodeId) {
        if c.is_ascii_lowercase() {
            self.letters[(c as u8 - b'a') as usize] = Some(id);
        } else {
            self.other.push((c, id));
        }
    }
}

/// Read-only prefix tree over a word list.
///
/// Only words with at least [`MIN_INDEXED_LEN`] characters are indexed,
/// independent of the minimum length used by any later search.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    /// Build the index from a sequence of words. Words are lower-cased;
    /// blank and short entries are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self {
            nodes: vec![Node::default()],
            words: 0,
        };

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.chars().count() < MIN_INDEXED_LEN {
                continue;
            }
            trie.insert(&word);
        }

        info!(
            "Built dictionary index: {} words, {} nodes",
            trie.words,
            trie.nodes.len()
        );
        trie
    }

    fn insert(&mut self, word: &str) {
        let mut node = NodeId::ROOT;
        for c in word.chars() {
            node = match self.nodes[node.index()].child(c) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[node.index()].set_child(c, next);
                    next
                }
            };
        }

        let terminal = &mut self.nodes[node.index()].terminal;
        if !*terminal {
            *terminal = true;
            self.words += 1;
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `c` out of `node`, if there is one.
    #[inline]
    pub fn descend(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node.index()].child(c)
    }

    /// Follow every character of `text` in turn.
    pub fn descend_str(&self, node: NodeId, text: &str) -> Option<NodeId> {
        text.chars().try_fold(node, |n, c| self.descend(n, c))
    }

    /// Whether the path from the root to `node` spells an indexed word.
    #[inline]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// Dictionary membership, case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.descend_str(self.root(), &word.to_lowercase())
            .is_some_and(|node| self.is_word(node))
    }

    /// Every indexed word starting with `prefix` (case-insensitive), in
    /// trie order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut words = Vec::new();
        if let Some(node) = self.descend_str(self.root(), &prefix) {
            let mut spelled = prefix;
            self.collect_words(node, &mut spelled, &mut words);
        }
        words
    }

    fn collect_words(&self, node: NodeId, spelled: &mut String, words: &mut Vec<String>) {
        let node = &self.nodes[node.index()];
        if node.terminal {
            words.push(spelled.clone());
        }
        for (c, child) in node.children() {
            spelled.push(c);
            self.collect_words(child, spelled, words);
            spelled.pop();
        }
    }

    /// Number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
