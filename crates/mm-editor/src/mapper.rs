//! The mapper controller.
//!
//! Owns the idea forest, the snap grid, the viewport, and the interaction
//! state, and turns [`InputEvent`]s into state changes and redraws on a
//! caller-supplied [`Surface`]. Every call runs to completion.

use crate::input::{InputEvent, PointerButton};
use crate::pan::PanState;
use crate::selection::{Selection, Transition};
use mm_core::error::Result;
use mm_core::storage::DEFAULT_KEY;
use mm_core::{
    BlobStore, Grid, IdeaId, IdeaStyle, MapperConfig, MindMap, Point, TextMeasure, Viewport,
};
use mm_render::{CursorStyle, Selectable, Surface, hit_test, paint_children, paint_scene};

/// Where the pointer is, in every coordinate space the mapper uses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    /// Surface pixels.
    pub position: Point,
    /// Playground pixels.
    pub playground: Point,
    /// Grid cell containing `playground`.
    pub cell: (i64, i64),
}

pub struct MindMapper {
    config: MapperConfig,
    map: MindMap,
    grid: Grid,
    viewport: Viewport,
    cursor: Cursor,
    selection: Selection,
    pan: PanState,
    selectables: Vec<Selectable>,
    /// Set when the tree may have changed since `selectables` was built.
    stale: bool,
    snap: Option<Point>,
}

impl MindMapper {
    /// Build a mapper for a surface, centering the viewport on the playground.
    pub fn new(config: MapperConfig, surface: &dyn Surface) -> Result<Self> {
        config.validate()?;
        let playground = config.playground();
        let viewport = Viewport::centered(
            playground,
            surface.width() as i32,
            surface.height() as i32,
        );
        let grid = Grid::new(playground, config.grid_size, config.grid_color);
        log::debug!(
            "mapper over {}x{} playground, viewport at ({}, {})",
            playground.width,
            playground.height,
            viewport.x,
            viewport.y
        );

        Ok(Self {
            map: MindMap::new(&config),
            config,
            grid,
            viewport,
            cursor: Cursor::default(),
            selection: Selection::new(),
            pan: PanState::default(),
            selectables: Vec::new(),
            stale: true,
            snap: None,
        })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn map(&self) -> &MindMap {
        &self.map
    }

    /// Mutable access to the tree. Hit testing resyncs on the next event.
    pub fn map_mut(&mut self) -> &mut MindMap {
        self.stale = true;
        &mut self.map
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selection(&self) -> Option<IdeaId> {
        self.selection.current()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    /// Grid point the last non-panning move snapped to.
    pub fn snap_point(&self) -> Option<Point> {
        self.snap
    }

    /// Follow a surface resize. The viewport keeps its origin.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport.resize(width, height);
    }

    // ─── Ideas ───────────────────────────────────────────────────────────

    /// Add an idea under `parent`, or a new root. Text is measured with
    /// `measure`, normally the surface the map is drawn on.
    pub fn create_idea(
        &mut self,
        parent: Option<IdeaId>,
        x: i32,
        y: i32,
        text: &str,
        style: Option<IdeaStyle>,
        measure: &dyn TextMeasure,
    ) -> Result<IdeaId> {
        let id = self.map.create_idea(parent, x, y, text, style, measure)?;
        self.stale = true;
        Ok(id)
    }

    /// Remove an idea and its subtree, clearing the selection if it was in it.
    pub fn remove_idea(&mut self, id: IdeaId) -> Result<usize> {
        let removed = self.map.remove_idea(id)?;
        let map = &self.map;
        self.selection.forget_missing(|id| map.contains(id));
        self.stale = true;
        Ok(removed)
    }

    /// One topic with four children, the last of which has four more.
    pub fn seed_demo(&mut self, measure: &dyn TextMeasure) -> Result<IdeaId> {
        let topic = self.create_idea(None, 200, 200, "Topic", None, measure)?;
        let mut last = topic;
        for (x, y, text) in [
            (100, 100, "First"),
            (200, 100, "Second"),
            (100, 300, "Third"),
            (200, 300, "Fourth"),
        ] {
            last = self.create_idea(Some(topic), x, y, text, None, measure)?;
        }
        for (y, text) in [(350, "First"), (400, "Second"), (450, "Third"), (500, "Fourth")] {
            self.create_idea(Some(last), 275, y, text, None, measure)?;
        }
        Ok(topic)
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    pub fn save(&self, store: &mut dyn BlobStore) -> Result<()> {
        self.map.save(store, DEFAULT_KEY)
    }

    /// Replace the tree with the stored one. Returns `false` if nothing was
    /// stored, leaving the current tree in place.
    pub fn load(&mut self, store: &dyn BlobStore) -> Result<bool> {
        let Some(map) = MindMap::load(store, DEFAULT_KEY, &self.config)? else {
            return Ok(false);
        };
        self.map = map;
        self.selection.update(None);
        self.stale = true;
        Ok(true)
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Full redraw, rebuilding the hit-test list for the new frame.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        paint_scene(surface, &self.map, &mut self.grid, &self.viewport);
        self.refresh_selectables();
    }

    fn refresh_selectables(&mut self) {
        self.selectables = mm_render::selectables(&self.map);
        self.stale = false;
    }

    // ─── Events ──────────────────────────────────────────────────────────

    pub fn handle(&mut self, event: InputEvent, surface: &mut dyn Surface) {
        log::trace!("event {event:?}");
        match event {
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y), surface),
            InputEvent::PointerDown { x, y, button } => {
                if button == PointerButton::Primary {
                    self.pointer_down(Point::new(x, y));
                } else {
                    self.context_click(Point::new(x, y));
                }
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave { .. } => self.pan.stop(),
            InputEvent::Click { .. } => self.click(surface),
            InputEvent::ContextClick { x, y } => self.context_click(Point::new(x, y)),
        }
    }

    fn refresh_cursor(&mut self, position: Point) {
        let playground = self.viewport.to_playground(position);
        self.cursor = Cursor {
            position,
            playground,
            cell: self.grid.cell_of(playground),
        };
    }

    fn pointer_move(&mut self, position: Point, surface: &mut dyn Surface) {
        self.refresh_cursor(position);
        let panned = match self.pan.drag(position) {
            Some(delta) => {
                self.viewport.pan(delta);
                self.refresh_cursor(position);
                true
            }
            None => false,
        };

        // Hit test against the post-pan viewport.
        if self.stale {
            self.refresh_selectables();
        }
        let hit = hit_test(&self.selectables, self.cursor.playground);
        let transition = self.selection.update(hit);

        if panned {
            self.snap = None;
            self.draw(surface);
        } else {
            self.snap = self.grid.nearest(self.cursor.playground);
            if let Some(point) = self.snap {
                self.draw(surface);
                mm_render::paint_snap_marker(
                    surface,
                    point,
                    &self.viewport,
                    self.config.snap_marker,
                    self.config.snap_color,
                );
            }
        }

        if let Some(Transition { current, .. }) = transition {
            surface.set_cursor(match current {
                Some(_) => CursorStyle::Pointer,
                None => CursorStyle::Default,
            });
        }
    }

    fn pointer_down(&mut self, position: Point) {
        self.refresh_cursor(position);
        if self.selection.is_empty() {
            self.pan.start(position);
        }
    }

    fn click(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.selection.current() {
            paint_children(surface, &self.map, id, &self.viewport);
        }
    }

    fn context_click(&mut self, at: Point) {
        log::info!("context click at ({}, {})", at.x, at.y);
    }
}
