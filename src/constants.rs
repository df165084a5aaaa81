// Page wiring constants for the browser front-end.
// Element ids and CSS class names are what the landing page markup and
// stylesheet expect; the frame budget is the informal per-frame target.

// Default mount points
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const MURAL_CONTAINER_ID: &str = "mural-2d";

// Hero parallax targets (CSS selectors)
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_MODEL_SELECTOR: &str = "model-viewer";

// Mural markup
pub const TILE_CLASS: &str = "polaroid-item";
pub const TILE_PIN_CLASS: &str = "polaroid-pin";
pub const TILE_IMG_CLASS: &str = "polaroid-img";
pub const TILE_DRAGGING_CLASS: &str = "dragging";

// ~60Hz display refresh, in milliseconds
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;
