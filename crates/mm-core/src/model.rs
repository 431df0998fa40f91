//! The idea forest.
//!
//! Ideas live in a stable arena (`StableDiGraph`) and are addressed by
//! [`IdeaId`]. Graph edges run parent → child and carry an insertion
//! sequence number, so child order is the order ideas were added in even
//! after arena slots get reused. Top-level ideas are kept in `roots`.
//!
//! Branches are owned by the idea they start from. They store only which
//! ideas they join and any pinned sides; endpoint geometry is routed on
//! demand from the ideas' current boxes.

use crate::config::MapperConfig;
use crate::error::{MapError, Result};
use crate::geometry::Bounds;
use crate::id::IdeaId;
use crate::measure::TextMeasure;
use crate::routing::{Route, Side, route};
use crate::style::{Color, IdeaStyle};
use petgraph::Direction;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::{Dfs, EdgeRef};
use smallvec::SmallVec;

/// Size given to ideas with no text.
pub const EMPTY_IDEA_SIZE: f64 = 40.0;

// ─── Branch ──────────────────────────────────────────────────────────────

/// A tapered connector from one idea to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub from: IdeaId,
    pub to: IdeaId,
    /// Pinned start side; inferred per route when `None`.
    pub start_side: Option<Side>,
    /// Pinned end side; inferred per route when `None`.
    pub end_side: Option<Side>,
    pub weight: f64,
    pub color: Color,
    pub display: bool,
}

// ─── Idea ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Idea {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
    pub style: IdeaStyle,
    /// Depth in the forest; roots are 0.
    pub level: u32,
    pub display: bool,
    /// Branches leaving this idea.
    pub branches: SmallVec<[Branch; 4]>,
}

impl Idea {
    pub fn new(
        text: impl Into<String>,
        x: i32,
        y: i32,
        width: f64,
        height: f64,
        style: IdeaStyle,
        level: u32,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            style,
            level,
            display: true,
            branches: SmallVec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x as f64, self.y as f64, self.width, self.height)
    }

    /// Center used for branch routing.
    ///
    /// Not the box centroid: half the padding is added to each
    /// dimension before halving, which nudges the point right and down.
    pub fn skewed_center(&self) -> (f64, f64) {
        let pad = self.style.padding / 2.0;
        (
            self.x as f64 + (self.width + pad) / 2.0,
            self.y as f64 + (self.height + pad) / 2.0,
        )
    }
}

/// Box size for `text` in `style`: text advance plus padding on both sides,
/// font size plus one padding tall. Empty text gets a 40×40 box.
pub fn measure_idea(text: &str, style: &IdeaStyle, measure: &dyn TextMeasure) -> (f64, f64) {
    if text.is_empty() {
        return (EMPTY_IDEA_SIZE, EMPTY_IDEA_SIZE);
    }
    let width = measure.text_width(text, &style.font) + style.padding * 2.0;
    let height = style.font.size.value + style.padding;
    (width, height)
}

// ─── Mind map ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MindMap {
    graph: StableDiGraph<Idea, u64>,
    roots: Vec<IdeaId>,
    next_seq: u64,
    default_style: IdeaStyle,
    branch_weight: f64,
    branch_color: Color,
}

impl MindMap {
    pub fn new(config: &MapperConfig) -> Self {
        Self {
            graph: StableDiGraph::new(),
            roots: Vec::new(),
            next_seq: 0,
            default_style: config.idea_style.clone(),
            branch_weight: config.branch_weight,
            branch_color: config.branch_color,
        }
    }

    pub fn default_style(&self) -> &IdeaStyle {
        &self.default_style
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: IdeaId) -> bool {
        self.graph.contains_node(id.node())
    }

    pub fn get(&self, id: IdeaId) -> Option<&Idea> {
        self.graph.node_weight(id.node())
    }

    pub fn get_mut(&mut self, id: IdeaId) -> Option<&mut Idea> {
        self.graph.node_weight_mut(id.node())
    }

    fn require(&self, id: IdeaId) -> Result<&Idea> {
        self.get(id).ok_or(MapError::UnknownIdea(id))
    }

    fn require_mut(&mut self, id: IdeaId) -> Result<&mut Idea> {
        self.get_mut(id).ok_or(MapError::UnknownIdea(id))
    }

    pub fn roots(&self) -> &[IdeaId] {
        &self.roots
    }

    /// Direct children of `parent`, or the roots for `None`, in insertion order.
    pub fn ideas(&self, parent: Option<IdeaId>) -> Vec<IdeaId> {
        let Some(parent) = parent else {
            return self.roots.clone();
        };
        let mut children: Vec<(u64, IdeaId)> = self
            .graph
            .edges_directed(parent.node(), Direction::Outgoing)
            .map(|e| (*e.weight(), IdeaId(e.target())))
            .collect();
        children.sort_unstable_by_key(|(seq, _)| *seq);
        children.into_iter().map(|(_, id)| id).collect()
    }

    pub fn parent(&self, id: IdeaId) -> Option<IdeaId> {
        self.graph
            .neighbors_directed(id.node(), Direction::Incoming)
            .next()
            .map(IdeaId)
    }

    /// Every idea, parents before children, siblings in insertion order.
    pub fn depth_first(&self) -> Vec<IdeaId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<IdeaId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.ideas(Some(id)).into_iter().rev());
        }
        out
    }

    /// Add an idea under `parent` (or as a root).
    ///
    /// The box is measured from `text` once, here. A non-root idea is joined
    /// to its parent by a new branch with inferred sides.
    pub fn create_idea(
        &mut self,
        parent: Option<IdeaId>,
        x: i32,
        y: i32,
        text: &str,
        style: Option<IdeaStyle>,
        measure: &dyn TextMeasure,
    ) -> Result<IdeaId> {
        let level = match parent {
            Some(p) => self.require(p)?.level + 1,
            None => 0,
        };
        let style = style.unwrap_or_else(|| self.default_style.clone());
        let (width, height) = measure_idea(text, &style, measure);
        let idea = Idea::new(text, x, y, width, height, style, level);

        let id = self.insert(parent, idea);
        log::debug!("created idea {id} {text:?} at ({x}, {y}) level {level}");

        if let Some(p) = parent {
            self.create_branch(p, id, None, None)?;
        }
        Ok(id)
    }

    /// Link an already-built idea into the forest without creating branches.
    pub(crate) fn insert(&mut self, parent: Option<IdeaId>, idea: Idea) -> IdeaId {
        let id = IdeaId(self.graph.add_node(idea));
        match parent {
            Some(p) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.graph.add_edge(p.node(), id.node(), seq);
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Connect `from` → `to`, owned by `from`. Returns the branch's index in
    /// `from`'s branch list.
    pub fn create_branch(
        &mut self,
        from: IdeaId,
        to: IdeaId,
        start_side: Option<Side>,
        end_side: Option<Side>,
    ) -> Result<usize> {
        self.require(to)?;
        let branch = Branch {
            from,
            to,
            start_side,
            end_side,
            weight: self.branch_weight,
            color: self.branch_color,
            display: true,
        };
        let owner = self.require_mut(from)?;
        owner.branches.push(branch);
        Ok(owner.branches.len() - 1)
    }

    pub fn branches(&self, id: IdeaId) -> &[Branch] {
        self.get(id).map_or(&[], |i| i.branches.as_slice())
    }

    pub fn branch_count(&self) -> usize {
        self.graph.node_weights().map(|i| i.branches.len()).sum()
    }

    /// Current endpoint geometry for a branch, or `None` if either end is gone.
    pub fn route_branch(&self, branch: &Branch) -> Option<Route> {
        let from = self.get(branch.from)?;
        let to = self.get(branch.to)?;
        Some(route(from, to, branch.start_side, branch.end_side))
    }

    /// Reposition an idea. Its branches re-route on the next draw.
    pub fn move_idea(&mut self, id: IdeaId, x: i32, y: i32) -> Result<()> {
        let idea = self.require_mut(id)?;
        idea.x = x;
        idea.y = y;
        Ok(())
    }

    /// Replace an idea's text and re-measure its box.
    pub fn set_text(&mut self, id: IdeaId, text: &str, measure: &dyn TextMeasure) -> Result<()> {
        let idea = self.require_mut(id)?;
        let (width, height) = measure_idea(text, &idea.style, measure);
        idea.text = text.to_string();
        idea.width = width;
        idea.height = height;
        Ok(())
    }

    pub fn set_display(&mut self, id: IdeaId, display: bool) -> Result<()> {
        self.require_mut(id)?.display = display;
        Ok(())
    }

    /// Remove an idea with its whole subtree, plus every branch that touched
    /// any removed idea. Returns how many ideas were removed.
    pub fn remove_idea(&mut self, id: IdeaId) -> Result<usize> {
        self.require(id)?;

        let mut doomed = Vec::new();
        let mut dfs = Dfs::new(&self.graph, id.node());
        while let Some(nx) = dfs.next(&self.graph) {
            doomed.push(IdeaId(nx));
        }

        for &gone in &doomed {
            self.graph.remove_node(gone.node());
        }
        self.roots.retain(|r| !doomed.contains(r));
        for idea in self.graph.node_weights_mut() {
            idea.branches.retain(|b| !doomed.contains(&b.to));
        }

        log::debug!("removed idea {id} and {} descendants", doomed.len() - 1);
        Ok(doomed.len())
    }
}

impl Default for MindMap {
    fn default() -> Self {
        Self::new(&MapperConfig::default())
    }
}
