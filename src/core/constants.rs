// Shared interaction/layout tuning constants used by the web frontend.

// Drag and wheel mapping
pub const DRAG_TO_DEG: f64 = 0.2; // degrees of rotation per pointer pixel
pub const WHEEL_TO_DEG: f64 = 0.1; // degrees of rotation per wheel delta unit
pub const RELEASE_MIN_PX: f64 = 0.5; // residual drag delta needed to seed inertia
pub const CLICK_SLOP_PX: f64 = 5.0; // drags longer than this do not activate a tile

// Inertia
pub const INERTIA_DAMPING: f64 = 0.95; // velocity multiplier per frame
pub const INERTIA_MIN_DEG: f64 = 0.01; // below this the ring is considered at rest

// Auto-spin
pub const IDLE_RESUME_MS: f64 = 2000.0;
pub const AUTO_SPIN_PERIOD_MS: f64 = 20_000.0; // one full revolution
pub const AUTO_SPIN_DEG_PER_MS: f64 = 360.0 / AUTO_SPIN_PERIOD_MS;

// Frame timing
pub const DEFAULT_FRAME_MS: f64 = 16.0; // assumed dt for the first frame after (re)start
pub const MAX_FRAME_MS: f64 = 100.0; // clamp after background-tab stalls

// Ring layout
pub const TILE_WIDTH_PX: f64 = 256.0; // .lab-tile is 16rem wide
pub const RING_RADIUS_MIN_PX: f64 = 400.0;
pub const RING_RADIUS_MAX_PX: f64 = 1200.0;
pub const RING_RADIUS_FALLBACK_PX: f64 = 600.0; // used below three tiles

// Depth fade
pub const DEPTH_OPACITY_FLOOR: f64 = 0.6; // back tiles never drop below this

// FX gating
pub const FX_MIN_CORES: u32 = 6;
pub const FALLBACK_CORES: u32 = 4; // assumed when hardwareConcurrency is missing

// Persistence and announcements
pub const VIEW_MODE_STORAGE_KEY: &str = "labViewMode";
pub const ANNOUNCE_CLEAR_MS: i32 = 1000;
pub const GRID_REGION_LABEL: &str = "Project grid";
