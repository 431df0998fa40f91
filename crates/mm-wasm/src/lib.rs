//! WASM bridge for Mind Mapper: drives the mapper from JavaScript and draws
//! onto an HTML canvas.
//!
//! Compiled via `wasm-pack build --target web`. The host forwards canvas
//! mouse events with positions already relative to the canvas.

mod canvas2d;
pub mod tree;

use canvas2d::CanvasSurface;
use mm_core::{IdeaId, IdeaStyle, MapperConfig};
use mm_editor::{InputEvent, MindMapper};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// The JavaScript-facing mapper: one per canvas.
#[wasm_bindgen]
pub struct MindMapperCanvas {
    mapper: MindMapper,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl MindMapperCanvas {
    /// Attach a mapper with the stock configuration to `canvas`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<MindMapperCanvas, JsValue> {
        Self::build(canvas, MapperConfig::default())
    }

    /// Attach a mapper configured from JSON. Missing fields take their
    /// defaults; an unreadable or invalid config falls back to the defaults.
    pub fn with_config(canvas: HtmlCanvasElement, json: &str) -> Result<MindMapperCanvas, JsValue> {
        Self::build(canvas, parse_config(json))
    }

    fn build(canvas: HtmlCanvasElement, config: MapperConfig) -> Result<MindMapperCanvas, JsValue> {
        setup_hooks();
        let surface = CanvasSurface::new(canvas)?;
        let mapper = MindMapper::new(config, &surface).map_err(to_js)?;
        let mut this = Self { mapper, surface };
        this.mapper.draw(&mut this.surface);
        Ok(this)
    }

    /// Create an idea under `parent` (or a new root) and return its id.
    /// `style_json` optionally overrides the default idea style.
    pub fn create_idea(
        &mut self,
        parent: Option<u32>,
        x: f64,
        y: f64,
        text: &str,
        style_json: Option<String>,
    ) -> Result<u32, JsValue> {
        let parent = parent.map(|p| IdeaId::from_index(p as usize));
        let style = style_json.as_deref().and_then(parse_style);
        let at = mm_core::Point::coerce(x, y);
        let id = self
            .mapper
            .create_idea(parent, at.x, at.y, text, style, &self.surface)
            .map_err(to_js)?;
        Ok(id.index() as u32)
    }

    /// Populate the stock demo map and return the topic's id.
    pub fn seed_demo(&mut self) -> Result<u32, JsValue> {
        let topic = self.mapper.seed_demo(&self.surface).map_err(to_js)?;
        Ok(topic.index() as u32)
    }

    pub fn draw(&mut self) {
        self.mapper.draw(&mut self.surface);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.mapper.resize(width as i32, height as i32);
    }

    // ─── Input ───────────────────────────────────────────────────────────

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.dispatch(InputEvent::pointer_move(x, y));
    }

    /// `button` uses `MouseEvent.button` numbering; anything but the primary
    /// button is treated as a context click.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) {
        self.dispatch(InputEvent::pointer_down(x, y, button));
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let p = mm_core::Point::coerce(x, y);
        self.dispatch(InputEvent::PointerUp { x: p.x, y: p.y });
    }

    pub fn pointer_leave(&mut self, x: f64, y: f64) {
        let p = mm_core::Point::coerce(x, y);
        self.dispatch(InputEvent::PointerLeave { x: p.x, y: p.y });
    }

    pub fn click(&mut self, x: f64, y: f64) {
        let p = mm_core::Point::coerce(x, y);
        self.dispatch(InputEvent::Click { x: p.x, y: p.y });
    }

    pub fn context_click(&mut self, x: f64, y: f64) {
        let p = mm_core::Point::coerce(x, y);
        self.dispatch(InputEvent::ContextClick { x: p.x, y: p.y });
    }

    fn dispatch(&mut self, event: InputEvent) {
        self.mapper.handle(event, &mut self.surface);
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Id of the hovered idea, if any.
    pub fn selection(&self) -> Option<u32> {
        self.mapper.selection().map(|id| id.index() as u32)
    }

    pub fn is_panning(&self) -> bool {
        self.mapper.is_panning()
    }

    /// The idea forest as a JSON string.
    pub fn tree_json(&self) -> Result<String, JsValue> {
        tree::to_json(self.mapper.map()).map_err(to_js)
    }

    /// The idea forest as a plain JS object.
    pub fn tree(&self) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&self.tree_json()?)
    }
}

/// Config from JSON, falling back to defaults on parse or validation errors.
pub fn parse_config(json: &str) -> MapperConfig {
    let config = match serde_json::from_str::<MapperConfig>(json) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("ignoring unreadable mapper config: {e}");
            return MapperConfig::default();
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("ignoring mapper config: {e}");
            MapperConfig::default()
        }
    }
}

/// Idea style from JSON; `None` (use the map default) if it cannot be read.
pub fn parse_style(json: &str) -> Option<IdeaStyle> {
    serde_json::from_str(json)
        .map_err(|e| log::warn!("ignoring unreadable idea style: {e}"))
        .ok()
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn setup_hooks() {
    use std::sync::Once;
    static SETUP: Once = Once::new();
    SETUP.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("logger already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::{Color, Length};
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse_config(r##"{ "grid_size": 25, "branch_color": "#050" }"##);
        assert_eq!(cfg.grid_size, 25);
        assert_eq!(cfg.branch_color, Color::rgb(0, 0x55, 0));
        assert_eq!(cfg.playground_width, 2000);
    }

    #[test]
    fn bad_config_falls_back() {
        assert_eq!(parse_config("not json"), MapperConfig::default());
        assert_eq!(parse_config(r#"{ "grid_size": 0 }"#), MapperConfig::default());
    }

    #[test]
    fn style_json_overrides_fields() {
        let style = parse_style(r##"{ "padding": 8, "fill": "#336699" }"##).unwrap();
        assert_eq!(style.padding, 8.0);
        assert_eq!(style.fill, Color::rgb(0x33, 0x66, 0x99));
        assert_eq!(style.radius, 15.0);
        assert!(parse_style(r#"{ "fill": "blue" }"#).is_none());

        let style = parse_style(
            r#"{ "font": { "size": "14px", "family": "serif" }, "border": { "weight": "2px" } }"#,
        )
        .unwrap();
        assert_eq!(style.font.size, Length::px(14.0));
        assert_eq!(style.font.family, "serif");
        assert_eq!(style.font.color, Color::WHITE);
        assert_eq!(style.border.weight, Length::px(2.0));

        let style = parse_style(r#"{ "font": "16pt monospace" }"#).unwrap();
        assert_eq!(style.font.css(), "16pt monospace");
        assert!(parse_style(r#"{ "border": { "weight": "heavy" } }"#).is_none());
    }
}
