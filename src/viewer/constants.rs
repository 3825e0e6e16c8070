pub const WORLD_SCALE: f64 = 3.0;
pub const WORLD_OFFSET: f64 = 500.0;
pub const SURFACE_SIZE: f64 = 1000.0;

pub const RINK_COLOR: &str = "black";
pub const RINK_LINE_WIDTH: f64 = 3.0;
pub const GOAL_INNER_COLOR: &str = "deeppink";
pub const PUCK_FILL_COLOR: &str = "green";
pub const PUCK_STROKE_COLOR: &str = "#003300";
pub const PUCK_LINE_WIDTH: f64 = 5.0;
pub const HULL_LINE_WIDTH: f64 = 3.0;
pub const WHEEL_COLOR: &str = "red";
pub const LIDAR_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

pub const PLAYER_FONT_SIZE: f64 = 12.0;
pub const AGENT_LABEL_OFFSET: f64 = 15.0;
pub const HUD_FONT_SIZE: f64 = 18.0;
pub const HUD_LABEL_COLUMN: f64 = 100.0;
pub const HUD_VALUE_COLUMN: f64 = 220.0;
pub const SCORE_SEPARATOR: &str = " : ";

pub const BACKOFF_FLOOR_MS: u64 = 1000;
pub const BACKOFF_CEILING_MS: u64 = 4000;
pub const EVENT_PAUSE_MS: u64 = 1500;

pub const TEAM_COLORS: [&str; 2] = ["coral", "cornflowerblue"];

pub const LIDAR_CATEGORY_COLORS: [&str; 8] = [
  "darkseagreen",
  "darkred",
  "darksalmon",
  "darkolivegreen",
  "darkorange",
  "darkmagenta",
  "darkgoldenrod",
  "crimson",
];
