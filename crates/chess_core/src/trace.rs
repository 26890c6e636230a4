//! Diagnostic decision trees.
//!
//! A strategy that has tracing enabled records every position it visits:
//! `enter` descends into the move being explored, `exit` resolves it with
//! the score the search settled on, `mark_best` tags the pick at the current
//! level. The trace is purely observational; selection never reads it.

use crate::types::Move;

#[derive(Debug, Clone)]
struct TraceNode {
    mv: Option<Move>, // None only for the root
    score: Option<i32>,
    best: bool,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct SearchTrace {
    nodes: Vec<TraceNode>,
    cursor: usize,
}

impl SearchTrace {
    pub fn new() -> Self {
        SearchTrace {
            nodes: vec![TraceNode {
                mv: None,
                score: None,
                best: false,
                parent: None,
                children: Vec::new(),
            }],
            cursor: 0,
        }
    }

    /// Descend into a new child of the current node.
    pub fn enter(&mut self, mv: Move) {
        let id = self.nodes.len();
        self.nodes.push(TraceNode {
            mv: Some(mv),
            score: None,
            best: false,
            parent: Some(self.cursor),
            children: Vec::new(),
        });
        self.nodes[self.cursor].children.push(id);
        self.cursor = id;
    }

    /// Record the resolved score of the current node and ascend. Calling
    /// this at the root scores the root and stays there.
    pub fn exit(&mut self, score: i32) {
        self.nodes[self.cursor].score = Some(score);
        if let Some(parent) = self.nodes[self.cursor].parent {
            self.cursor = parent;
        }
    }

    /// Tag `mv` as the choice among the current node's children, clearing
    /// any earlier tag at this level.
    pub fn mark_best(&mut self, mv: Move) {
        let children = self.nodes[self.cursor].children.clone();
        for id in children {
            let is_match = self.nodes[id].mv == Some(mv);
            self.nodes[id].best = is_match;
        }
    }

    /// Number of move nodes recorded (the root does not count).
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Indented text dump, children in exploration order. Unresolved nodes
    /// (abandoned on timeout) print `?` for their score.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for &child in &self.nodes[0].children {
            self.render_node(child, 0, &mut out);
        }
        out
    }

    fn render_node(&self, id: usize, depth: usize, out: &mut String) {
        let node = &self.nodes[id];
        for _ in 0..depth {
            out.push_str("  ");
        }
        if let Some(mv) = node.mv {
            out.push_str(&mv.to_string());
        }
        match node.score {
            Some(s) => out.push_str(&format!(" = {s}")),
            None => out.push_str(" = ?"),
        }
        if node.best {
            out.push_str(" *");
        }
        out.push('\n');
        for &child in &node.children {
            self.render_node(child, depth + 1, out);
        }
    }
}

impl Default for SearchTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod trace_tests;
