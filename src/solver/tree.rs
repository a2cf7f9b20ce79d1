//! Strategy tree with arena allocation
//!
//! Each node is a guess plus the working sets it was chosen from; each edge
//! is a non-winning score leading to the next guess. The tree starts as the
//! opening guess and grows one node per new score observed, so a solver that
//! plays many games only runs the selector once per distinct game state.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeId`].

use crate::core::{Codeword, Score, SolverError};
use rustc_hash::FxHashMap;

/// Index of a node in a [`StrategyTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The opening guess
    pub const ROOT: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A guess and what is known when it is played
#[derive(Debug)]
pub struct StrategyNode {
    guess: Codeword,
    children: FxHashMap<Score, NodeId>,
    /// Secrets consistent with every score on the path to this node
    possible_solutions: Vec<Codeword>,
    /// Codewords not yet played on the path before this node's guess
    unguessed: Vec<Codeword>,
    /// `possible_solutions.len()` at creation, kept after the lists are dropped
    solutions_remaining: usize,
    /// Distinct non-winning scores `guess` can produce; known after the
    /// first narrowing from this node
    expected_children: Option<usize>,
    depth: u32,
}

impl StrategyNode {
    fn new(guess: Codeword, possible_solutions: Vec<Codeword>, unguessed: Vec<Codeword>, depth: u32) -> Self {
        let mut node = Self {
            guess,
            children: FxHashMap::default(),
            solutions_remaining: possible_solutions.len(),
            possible_solutions,
            unguessed,
            expected_children: None,
            depth,
        };
        // Nothing but the guess itself is left, so no score can lead anywhere
        if node.possible_solutions.iter().all(|c| *c == guess) {
            node.expected_children = Some(0);
            node.release_working_sets();
        }
        node
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Codeword {
        &self.guess
    }

    /// Possible solutions when this guess is played
    ///
    /// Empty once every reachable child exists.
    #[inline]
    #[must_use]
    pub fn possible_solutions(&self) -> &[Codeword] {
        &self.possible_solutions
    }

    /// Codewords not played before this guess
    ///
    /// Empty once every reachable child exists.
    #[inline]
    #[must_use]
    pub fn unguessed(&self) -> &[Codeword] {
        &self.unguessed
    }

    #[inline]
    #[must_use]
    pub const fn solutions_remaining(&self) -> usize {
        self.solutions_remaining
    }

    #[inline]
    #[must_use]
    pub const fn expected_children(&self) -> Option<usize> {
        self.expected_children
    }

    /// Guesses played before this one (0 for the opening)
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn child(&self, score: Score) -> Option<NodeId> {
        self.children.get(&score).copied()
    }

    /// Children ordered by score, highest first
    #[must_use]
    pub fn children(&self) -> Vec<(Score, NodeId)> {
        let mut children: Vec<_> = self.children.iter().map(|(&s, &id)| (s, id)).collect();
        children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        children
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Every score this guess can produce already has a child
    #[must_use]
    pub fn is_fully_explored(&self) -> bool {
        self.expected_children
            .is_some_and(|expected| self.children.len() >= expected)
    }

    /// Whether the working lists are still held
    #[must_use]
    pub fn holds_working_sets(&self) -> bool {
        !self.possible_solutions.is_empty() || !self.unguessed.is_empty()
    }

    fn release_working_sets(&mut self) {
        self.possible_solutions = Vec::new();
        self.unguessed = Vec::new();
    }
}

/// Summary of a tree's shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    /// Nodes still holding their working lists
    pub holding_working_sets: usize,
    /// Deepest node, counting the opening as depth 0
    pub max_depth: u32,
}

/// Memoized strategy shared by every game a solver plays
#[derive(Debug)]
pub struct StrategyTree {
    nodes: Vec<StrategyNode>,
    winning: Score,
}

impl StrategyTree {
    /// Create a tree holding only the opening guess
    ///
    /// `possible_solutions` and `unguessed` are normally the full enumeration.
    #[must_use]
    pub fn new(opening: Codeword, possible_solutions: Vec<Codeword>, unguessed: Vec<Codeword>) -> Self {
        let winning = Score::winning(opening.pin_count());
        Self {
            nodes: vec![StrategyNode::new(opening, possible_solutions, unguessed, 0)],
            winning,
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &StrategyNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut StrategyNode {
        &mut self.nodes[id.index()]
    }

    /// Follow the edge for `score` out of `id`, if it has been explored
    #[inline]
    #[must_use]
    pub fn child(&self, id: NodeId, score: Score) -> Option<NodeId> {
        self.get(id).child(score)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the opening node exists from construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record how many distinct non-winning scores the guess at `id` produces
    ///
    /// Only the first call has any effect.
    pub fn set_expected_children(&mut self, id: NodeId, count: usize) {
        let node = self.get_mut(id);
        if node.expected_children.is_none() {
            node.expected_children = Some(count);
            if node.is_fully_explored() {
                node.release_working_sets();
            }
        }
    }

    /// Attach the next guess after `parent` scored `score`
    ///
    /// Once the parent has a child for every score it can produce, its
    /// working lists are dropped.
    ///
    /// # Errors
    /// Returns [`SolverError::InvariantViolation`] if `score` is the winning
    /// score or `parent` already has a child for it.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        score: Score,
        guess: Codeword,
        possible_solutions: Vec<Codeword>,
        unguessed: Vec<Codeword>,
    ) -> Result<NodeId, SolverError> {
        let parent_node = self.get(parent);
        let parent_guess = parent_node.guess;
        if score == self.winning {
            return Err(SolverError::InvariantViolation {
                secret: parent_guess.to_string(),
                detail: format!("winning score {score} cannot lead to another guess"),
            });
        }
        if parent_node.children.contains_key(&score) {
            return Err(SolverError::InvariantViolation {
                secret: parent_guess.to_string(),
                detail: format!("score {score} after guess {parent_guess} already has a child"),
            });
        }

        let depth = parent_node.depth + 1;
        let id = NodeId(u32::try_from(self.nodes.len()).map_err(|_| SolverError::InvariantViolation {
            secret: parent_guess.to_string(),
            detail: "strategy tree is full".to_string(),
        })?);
        self.nodes
            .push(StrategyNode::new(guess, possible_solutions, unguessed, depth));

        let parent_node = self.get_mut(parent);
        parent_node.children.insert(score, id);
        if parent_node.is_fully_explored() {
            parent_node.release_working_sets();
        }
        Ok(id)
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        self.nodes.iter().fold(
            TreeStats {
                nodes: self.nodes.len(),
                ..TreeStats::default()
            },
            |mut stats, node| {
                stats.leaves += usize::from(node.is_leaf());
                stats.holding_working_sets += usize::from(node.holds_working_sets());
                stats.max_depth = stats.max_depth.max(node.depth);
                stats
            },
        )
    }
}
