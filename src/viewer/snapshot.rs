use serde::{Deserialize, Deserializer};

pub type WirePoint = [f64; 2];

/// One full view of the simulation, as served by the game's read endpoint.
///
/// Every field defaults so a partial body still decodes; a snapshot without
/// both `players` and `board` is treated as not yet ready rather than as an
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Option<Vec<Player>>,
    #[serde(default)]
    pub board: Option<Board>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub timestep: f64,
    #[serde(default)]
    pub stepcount: f64,
    #[serde(default)]
    pub score: Vec<i64>,
    #[serde(default)]
    pub scored: bool,
    #[serde(default)]
    pub done: bool,
}

impl Snapshot {
    pub fn is_ready(&self) -> bool {
        self.players.is_some() && self.board.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    pub rink: Rink,
    pub puck: Puck,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rink {
    #[serde(default)]
    pub vertices: Vec<WirePoint>,
}

impl Rink {
    pub fn outline(&self) -> ClosedPolygon {
        ClosedPolygon::from_wire(&self.vertices)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Puck {
    pub position: WirePoint,
    pub radius: f64,
}

/// A goal on the wire is two open vertex chains, each carrying a duplicate
/// of its first vertex at the end as a closing sentinel.
#[derive(Debug, Clone, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub outer_vertices: Vec<WirePoint>,
    #[serde(default)]
    pub inner_vertices: Vec<WirePoint>,
}

impl Goal {
    pub fn outer(&self) -> ClosedPolygon {
        ClosedPolygon::from_wire(&self.outer_vertices)
    }

    pub fn inner(&self) -> ClosedPolygon {
        ClosedPolygon::from_wire(&self.inner_vertices)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub hull: Hull,
    #[serde(default)]
    pub wheels: Vec<Wheel>,
    #[serde(default)]
    pub lidar_points: Vec<[WirePoint; 2]>,
    #[serde(default)]
    pub lidar_categories: Vec<i64>,
    #[serde(default)]
    pub numagent: i64,
    /// 1-based team index.
    #[serde(default)]
    pub team: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hull {
    #[serde(default)]
    pub path: Vec<Vec<WirePoint>>,
    pub position: WirePoint,
}

impl Hull {
    pub fn sub_paths(&self) -> impl Iterator<Item = ClosedPolygon> + '_ {
        self.path.iter().map(|path| ClosedPolygon::from_wire(path))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wheel {
    #[serde(default)]
    pub path: Vec<WirePoint>,
}

impl Wheel {
    pub fn outline(&self) -> ClosedPolygon {
        ClosedPolygon::from_wire(&self.path)
    }
}

/// A closed polygon with no duplicated closing vertex. Drawing routines close
/// it implicitly, so the wire convention of repeating the first vertex is
/// normalized away here instead of at every call site.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPolygon {
    points: Vec<WirePoint>,
}

impl ClosedPolygon {
    pub fn from_wire(vertices: &[WirePoint]) -> Self {
        let mut points = vertices.to_vec();
        if points.len() >= 2 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    pub fn points(&self) -> &[WirePoint] {
        &self.points
    }
}

/// The simulation server formats `timestep` as a string, older builds sent a
/// plain number. Accept both.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
