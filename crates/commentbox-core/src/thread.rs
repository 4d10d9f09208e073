use crate::models::Comment;
use std::collections::{HashMap, HashSet};

/// A comment placed in the reply tree.
///
/// Nodes live in an arena owned by [`Thread`]; `parent` and `children` are
/// arena indices.
#[derive(Debug, Clone)]
pub struct ThreadNode {
    pub comment: Comment,
    /// Resolved parent index. None for roots, including comments whose
    /// parent id is unknown or that were cut out of a parent cycle.
    pub parent: Option<usize>,
    /// Children in the order they appeared in the flat list
    pub children: Vec<usize>,
    /// Number of ancestors between this node and its root
    pub depth: usize,
}

/// Rendering row produced by [`assemble`], in depth-first pre-order.
#[derive(Debug, Clone)]
pub struct ThreadEntry {
    pub comment: Comment,
    pub depth: usize,
    pub has_children: bool,
    /// All descendants, collapsed or not
    pub descendant_count: usize,
    pub is_collapsed: bool,
    /// False when any ancestor is collapsed
    pub is_visible: bool,
}

/// Reply tree built from a flat comment list.
///
/// Construction never fails:
/// - duplicate ids keep the first occurrence, later ones are skipped
/// - a parent id that matches nothing promotes the comment to root
/// - parent cycles are cut by promoting the member that appears latest in
///   the flat list to root
///
/// Parents may appear after their children in the flat list.
#[derive(Debug, Clone, Default)]
pub struct Thread {
    nodes: Vec<ThreadNode>,
    roots: Vec<usize>,
    /// Depth-first pre-order over `roots`
    order: Vec<usize>,
    index: HashMap<String, usize>,
}

impl Thread {
    pub fn build(comments: &[Comment]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(comments.len());
        let mut nodes: Vec<ThreadNode> = Vec::with_capacity(comments.len());

        // Pass 1: one node per id, first occurrence wins
        for comment in comments {
            if index.contains_key(&comment.id) {
                tracing::debug!(comment_id = %comment.id, "Skipping duplicate comment id");
                continue;
            }
            index.insert(comment.id.clone(), nodes.len());
            nodes.push(ThreadNode {
                comment: comment.clone(),
                parent: None,
                children: Vec::new(),
                depth: 0,
            });
        }

        // Pass 2: resolve parent references against the full index
        let mut parents: Vec<Option<usize>> = nodes
            .iter()
            .map(|node| {
                node.comment
                    .parent_ref()
                    .and_then(|parent_id| index.get(parent_id).copied())
            })
            .collect();

        let broken = break_cycles(&mut parents);
        if broken > 0 {
            tracing::debug!(cycles = broken, "Promoted comments in parent cycles to root");
        }

        let mut roots = Vec::new();
        for (idx, parent) in parents.iter().enumerate() {
            nodes[idx].parent = *parent;
            match parent {
                Some(p) => nodes[*p].children.push(idx),
                None => roots.push(idx),
            }
        }

        // Explicit work stack so nesting depth never grows the call stack
        let mut order = Vec::with_capacity(nodes.len());
        let mut stack: Vec<(usize, usize)> = roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((idx, depth)) = stack.pop() {
            nodes[idx].depth = depth;
            order.push(idx);
            for &child in nodes[idx].children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        Self {
            nodes,
            roots,
            order,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[ThreadNode] {
        &self.nodes
    }

    pub fn roots(&self) -> impl Iterator<Item = &ThreadNode> {
        self.roots.iter().map(|&idx| &self.nodes[idx])
    }

    pub fn get(&self, id: &str) -> Option<&ThreadNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn children_of(&self, id: &str) -> Vec<&ThreadNode> {
        self.get(id)
            .map(|node| node.children.iter().map(|&c| &self.nodes[c]).collect())
            .unwrap_or_default()
    }

    /// Flatten into rendering rows. Every node is emitted once; rows under a
    /// collapsed ancestor come back with `is_visible = false`.
    pub fn entries(&self, collapsed: &HashSet<String>) -> Vec<ThreadEntry> {
        let n = self.nodes.len();

        // Reverse pre-order finishes every child before its parent
        let mut descendants = vec![0usize; n];
        for &idx in self.order.iter().rev() {
            if let Some(p) = self.nodes[idx].parent {
                descendants[p] += descendants[idx] + 1;
            }
        }

        // Pre-order visits every parent before its children
        let mut hidden = vec![false; n];
        let mut entries = Vec::with_capacity(n);
        for &idx in &self.order {
            let node = &self.nodes[idx];
            if let Some(p) = node.parent {
                hidden[idx] = hidden[p] || collapsed.contains(&self.nodes[p].comment.id);
            }
            entries.push(ThreadEntry {
                comment: node.comment.clone(),
                depth: node.depth,
                has_children: !node.children.is_empty(),
                descendant_count: descendants[idx],
                is_collapsed: collapsed.contains(&node.comment.id),
                is_visible: !hidden[idx],
            });
        }
        entries
    }
}

/// Cut every cycle in the parent graph. Each node has at most one parent,
/// so each walk up the chain either ends at a root, joins an earlier walk,
/// or loops back onto itself. Returns the number of cycles cut.
fn break_cycles(parents: &mut [Option<usize>]) -> usize {
    // 0 = unvisited, otherwise the id of the walk that reached the node
    let mut walk_of = vec![0usize; parents.len()];
    let mut broken = 0;

    for start in 0..parents.len() {
        if walk_of[start] != 0 {
            continue;
        }
        let walk = start + 1;
        let mut current = start;
        loop {
            walk_of[current] = walk;
            let Some(parent) = parents[current] else {
                break;
            };
            if walk_of[parent] == 0 {
                current = parent;
                continue;
            }
            if walk_of[parent] == walk {
                // Loop closed: cut at the member listed last
                let mut latest = parent;
                let mut member = parent;
                while let Some(next) = parents[member] {
                    if next == parent {
                        break;
                    }
                    latest = latest.max(next);
                    member = next;
                }
                parents[latest] = None;
                broken += 1;
            }
            break;
        }
    }
    broken
}

/// Build the reply tree and flatten it in one call.
pub fn assemble(comments: &[Comment], collapsed: &HashSet<String>) -> Vec<ThreadEntry> {
    Thread::build(comments).entries(collapsed)
}
