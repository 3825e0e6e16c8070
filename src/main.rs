use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

mod viewer;

use viewer::client::SnapshotClient;
use viewer::render::render;
use viewer::svg::SvgSurface;
use viewer::ViewerConfig;

const DEFAULT_SNAPSHOT_URL: &str = "http://127.0.0.1:5000/read";
const DEFAULT_FRAME_PATH: &str = "frame.svg";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let url = env::var("SNAPSHOT_URL").unwrap_or_else(|_| DEFAULT_SNAPSHOT_URL.to_string());
  let frame_path = env::var("FRAME_PATH")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from(DEFAULT_FRAME_PATH));

  let mut config = ViewerConfig::default();
  if let Some(pause_ms) = env::var("EVENT_PAUSE_MS")
    .ok()
    .and_then(|value| value.parse::<u64>().ok())
  {
    config.event_pause = Duration::from_millis(pause_ms);
  }

  let client = SnapshotClient::new(url);
  tracing::info!("watching {} -> {}", client.url(), frame_path.display());

  viewer::run_viewer(&client, &config, |snapshot| {
    if !snapshot.is_ready() {
      return;
    }
    let mut surface = SvgSurface::new(config.surface_size, config.surface_size);
    render(&mut surface, &config, snapshot);
    // Overwrite in place: on fetch failure nothing is written, so the last
    // good frame stays on disk.
    if let Err(error) = fs::write(&frame_path, surface.finish()) {
      tracing::warn!(?error, "failed to write frame");
    }
  })
  .await;

  Ok(())
}
