use std::time::Duration;

pub mod backoff;
pub mod client;
pub mod constants;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod svg;


use self::backoff::Backoff;
use self::client::SnapshotClient;
use self::snapshot::Snapshot;

/// Rendering and scheduling parameters. The defaults match the original
/// viewer; the binary only overrides a couple of them from the environment.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub scale: f64,
    pub offset: f64,
    pub surface_size: f64,
    pub team_colors: Vec<String>,
    pub lidar_colors: Vec<String>,
    pub label_column: f64,
    pub value_column: f64,
    pub backoff_floor: Duration,
    pub backoff_ceiling: Duration,
    pub event_pause: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scale: constants::WORLD_SCALE,
            offset: constants::WORLD_OFFSET,
            surface_size: constants::SURFACE_SIZE,
            team_colors: constants::TEAM_COLORS
                .iter()
                .map(|color| color.to_string())
                .collect(),
            lidar_colors: constants::LIDAR_CATEGORY_COLORS
                .iter()
                .map(|color| color.to_string())
                .collect(),
            label_column: constants::HUD_LABEL_COLUMN,
            value_column: constants::HUD_VALUE_COLUMN,
            backoff_floor: Duration::from_millis(constants::BACKOFF_FLOOR_MS),
            backoff_ceiling: Duration::from_millis(constants::BACKOFF_CEILING_MS),
            event_pause: Duration::from_millis(constants::EVENT_PAUSE_MS),
        }
    }
}

/// The fetch-render-reschedule cycle. Runs until the process is torn down:
/// fetch failures back off exponentially and are never fatal, and a frame
/// that reports a goal or the end of the episode stays up for `event_pause`
/// before the next request goes out.
///
/// Requests never overlap; the next cycle starts only after the current one
/// (including any pause) has finished.
pub async fn run_viewer<F>(client: &SnapshotClient, config: &ViewerConfig, mut on_frame: F)
where
    F: FnMut(&Snapshot),
{
    let mut backoff = Backoff::new(config.backoff_floor, config.backoff_ceiling);
    loop {
        match client.fetch().await {
            Ok(snapshot) => {
                backoff.reset();
                tracing::debug!(step = snapshot.stepcount, "frame received");
                on_frame(&snapshot);
                if snapshot.done || snapshot.scored {
                    tokio::time::sleep(config.event_pause).await;
                }
            }
            Err(error) => {
                tracing::warn!(?error, "snapshot fetch failed");
                tokio::time::sleep(backoff.next_delay()).await;
            }
        }
    }
}
