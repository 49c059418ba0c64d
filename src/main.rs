use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lunbo::constants::*;
use lunbo::{AdvanceMode, CarouselConfig, Page};

mod banner;
mod slide;
mod texture_loader;

use crate::banner::Banner;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Rotating image banner: one slide per interval, hover a dot to hold it.
#[derive(Parser, Debug)]
#[command(name = "lunbo", version)]
struct Args {
    /// Directory holding the banner images (sorted by file name)
    image_directory: PathBuf,

    /// Use at most this many images
    #[arg(long, default_value_t = 3)]
    slides: usize,

    /// Auto-advance period in milliseconds
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Visit every slide in turn instead of wrapping on the last one
    #[arg(long)]
    full_cycle: bool,

    /// Run without a window for this many seconds of virtual time, logging each change
    #[arg(long, value_name = "SECS")]
    headless: Option<f32>,

    /// Id of the container holding the navigation dots
    #[arg(long, default_value = NAV_CONTAINER_ID)]
    nav_id: String,

    /// Id of the container holding the slide images
    #[arg(long, default_value = BANNER_CONTAINER_ID)]
    banner_id: String,

    /// Class marking the active navigation dot
    #[arg(long, default_value = HIGHLIGHT_CLASS)]
    highlight_class: String,
}

impl Args {
    fn carousel_config(&self) -> CarouselConfig {
        let advance = if self.full_cycle {
            AdvanceMode::FullCycle
        } else {
            AdvanceMode::Legacy
        };
        CarouselConfig::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_advance(advance)
            .with_nav_container(self.nav_id.clone())
            .with_banner_container(self.banner_id.clone())
            .with_highlight_class(self.highlight_class.clone())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunbo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut image_paths = load_sorted_image_paths(&args.image_directory)?;
    image_paths.truncate(args.slides);
    info!(
        directory = %args.image_directory.display(),
        images = image_paths.len(),
        "banner images found"
    );

    match args.headless {
        Some(seconds) => run_headless(&image_paths, args.carousel_config(), seconds),
        None => run_window(&image_paths, args.carousel_config()),
    }
}

fn run_window(image_paths: &[PathBuf], config: CarouselConfig) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Lunbo Banner")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    let mut sources = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => {
                slides.push(Slide::new(texture));
                sources.push(source_name(path));
            }
            Err(e) => warn!("skipping {}: {e:#}", path.display()),
        }
    }
    if slides.is_empty() {
        bail!("no slides were loaded");
    }

    let mut page = Page::banner(sources.as_slice(), config);
    lunbo::init(&mut page);
    let mut banner = Banner::new(page, slides);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));
        let mouse = rl.get_mouse_position();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        banner.update(dt, mouse, screen_width, screen_height);

        let mut d = rl.begin_drawing(&thread);
        banner.draw(&mut d);
    }

    banner.unload();
    Ok(())
}

fn run_headless(image_paths: &[PathBuf], config: CarouselConfig, seconds: f32) -> Result<()> {
    let end = Duration::try_from_secs_f32(seconds)
        .with_context(|| format!("--headless needs a non-negative number of seconds, got {seconds}"))?;
    let sources: Vec<String> = image_paths.iter().map(|p| source_name(p)).collect();
    let mut page = Page::banner(sources.as_slice(), config);
    lunbo::init(&mut page);

    let frame = Duration::from_secs_f32(FRAME_TIME);
    let mut shown: Vec<usize> = Vec::new();
    while page.now() < end {
        page.advance(frame.min(end - page.now()));
        let opaque = page.opaque();
        if opaque != shown {
            let src = opaque
                .first()
                .and_then(|i| sources.get(*i))
                .map(String::as_str)
                .unwrap_or("-");
            info!(
                at_ms = page.now().as_millis() as u64,
                slide = ?opaque,
                dot = ?page.highlighted(),
                src,
                "banner changed"
            );
            shown = opaque;
        }
    }

    page.unload();
    Ok(())
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_describe_the_homepage_banner() {
        let args = Args::parse_from(["lunbo", "images"]);
        assert_eq!(args.slides, 3);
        assert_eq!(args.headless, None);
        assert_eq!(args.carousel_config(), CarouselConfig::default());
    }

    #[test]
    fn cli_flags_reach_the_config() {
        let args = Args::parse_from([
            "lunbo",
            "images",
            "--interval-ms",
            "250",
            "--full-cycle",
            "--nav-id",
            "dots",
        ]);
        let config = args.carousel_config();
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.advance, AdvanceMode::FullCycle);
        assert_eq!(config.nav_container, "dots");
    }

    #[test]
    fn source_name_is_the_file_name() {
        assert_eq!(source_name(Path::new("/tmp/banner/a.jpg")), "a.jpg");
    }

    #[test]
    fn headless_rejects_unusable_durations() {
        let paths = vec![PathBuf::from("a.jpg")];
        assert!(run_headless(&paths, CarouselConfig::default(), -1.0).is_err());
        assert!(run_headless(&paths, CarouselConfig::default(), f32::NAN).is_err());
        assert!(run_headless(&paths, CarouselConfig::default(), 1e20).is_err());
        assert!(run_headless(&paths, CarouselConfig::default(), 2.5).is_ok());
    }
}
