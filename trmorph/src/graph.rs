//! The morphotactics graph: `MorphemeState` nodes and `SuffixTransition`
//! edges over `petgraph`. Built once by `crate::morphotactics`, immutable
//! thereafter. `NodeIndex`/`EdgeIndex` serve as the `StateId`/`TransitionId`
//! integer-index arena spec.md §9 calls for.

use crate::condition::Condition;
use crate::morpheme::Morpheme;
use crate::template::{tokenize, Template};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

pub type StateId = NodeIndex;
pub type TransitionId = EdgeIndex;

/// A node in the morphotactics graph.
#[derive(Debug, Clone)]
pub struct MorphemeState {
    pub name: &'static str,
    pub morpheme: Morpheme,
    /// May end an analysis.
    pub terminal: bool,
    /// Marks a morphotactic boundary where the grammatical category may
    /// change; used by history predicates (inflection-group boundary).
    pub derivative: bool,
    /// Entry point for its POS category.
    pub pos_root: bool,
}

impl MorphemeState {
    pub fn new(name: &'static str, morpheme: Morpheme) -> Self {
        MorphemeState {
            name,
            morpheme,
            terminal: false,
            derivative: false,
            pos_root: false,
        }
    }
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }
    pub fn derivative(mut self) -> Self {
        self.derivative = true;
        self
    }
    pub fn pos_root(mut self) -> Self {
        self.pos_root = true;
        self
    }
}

/// An edge in the morphotactics graph.
#[derive(Debug, Clone)]
pub struct SuffixTransition {
    pub template_raw: &'static str,
    pub template: Template,
    pub condition: Option<Condition>,
}

impl SuffixTransition {
    pub fn has_surface_form(&self) -> bool {
        !self.template.tokens.is_empty()
    }
}

/// Thin wrapper around `petgraph::DiGraph` plus the builder helpers that
/// mirror `MorphemeState.add`/`add_empty`/`add_all` in
/// `zeyrek/morphotactics.py`.
pub struct Graph {
    pub g: DiGraph<MorphemeState, SuffixTransition>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { g: DiGraph::new() }
    }

    pub fn add_state(&mut self, state: MorphemeState) -> StateId {
        self.g.add_node(state)
    }

    pub fn add(
        &mut self,
        from: StateId,
        to: StateId,
        template: &'static str,
        condition: Option<Condition>,
    ) -> TransitionId {
        let tmpl = tokenize(template);
        self.g.add_edge(
            from,
            to,
            SuffixTransition {
                template_raw: template,
                template: tmpl,
                condition,
            },
        )
    }

    pub fn add_empty(&mut self, from: StateId, to: StateId, condition: Option<Condition>) -> TransitionId {
        self.add(from, to, "", condition)
    }

    pub fn add_all(&mut self, from: StateId, edges: &[(StateId, &'static str)]) {
        for (to, tmpl) in edges {
            self.add(from, *to, tmpl, None);
        }
    }

    pub fn state(&self, id: StateId) -> &MorphemeState {
        &self.g[id]
    }

    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = (TransitionId, StateId, &SuffixTransition)> {
        self.g
            .edges(id)
            .map(|e| (e.id(), e.target(), e.weight()))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
