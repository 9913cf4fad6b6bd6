mod svg;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use glam::Vec2;
use room_core::{
    LoaderDriver, SceneConfig, SceneRenderer, Schedule, ScrollDriver, TickOutcome,
};
use std::path::{Path, PathBuf};
use svg::SvgSurface;

const PREVIEW_FPS: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Wall-clock loader; `--at` is in seconds
    Loader,
    /// Scroll illustration; `--at` is scroll progress in 0..=1
    Scroll,
}

#[derive(Parser, Debug)]
#[command(name = "room-native")]
#[command(about = "Render blueprint room frames to SVG")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Loader)]
    mode: Mode,

    /// Time (loader) or progress (scroll) of the last frame; defaults to the end
    #[arg(long)]
    at: Option<f32>,

    /// Number of frames, evenly spaced from the start up to `--at`
    #[arg(long, default_value_t = 1)]
    frames: u32,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Output file; with several frames an index is appended to the stem
    #[arg(long, default_value = "blueprint.svg")]
    out: PathBuf,
}

/// Sample points for `frames` frames ending at `end`. A single frame is `end` itself.
fn frame_positions(end: f32, frames: u32) -> Vec<f32> {
    let end = if end.is_finite() { end.max(0.0) } else { 0.0 };
    match frames {
        0 => Vec::new(),
        1 => vec![end],
        n => (0..n)
            .map(|i| end * i as f32 / (n - 1) as f32)
            .collect(),
    }
}

fn frame_path(out: &Path, index: usize, frames: u32) -> PathBuf {
    if frames <= 1 {
        return out.to_path_buf();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let ext = out
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "svg".to_string());
    out.with_file_name(format!("{stem}-{index:04}.{ext}"))
}

fn write_frame(path: &Path, surface: &SvgSurface) -> anyhow::Result<()> {
    std::fs::write(path, surface.document())
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn render_loader(cli: &Cli, size: Vec2) -> anyhow::Result<usize> {
    let schedule = Schedule::loader()?;
    let end = cli.at.unwrap_or(schedule.total_duration());
    let config = SceneConfig::loader();
    let mut surface = SvgSurface::new(size, config.palette.background);
    let mut renderer = SceneRenderer::new(config, size.x, size.y);
    let mut driver = LoaderDriver::new(schedule);
    driver.start();

    let positions = frame_positions(end, cli.frames);
    for (i, t) in positions.iter().enumerate() {
        let dt = (t - driver.elapsed()).max(0.0);
        if driver.tick(dt) == TickOutcome::Completed {
            log::info!("[loader] completed at frame {}", i);
        }
        // particles drift at the preview rate regardless of frame spacing
        renderer.advance_particles(dt.min(1.0 / PREVIEW_FPS));
        renderer.render(&mut surface, driver.record());
        write_frame(&frame_path(&cli.out, i, cli.frames), &surface)?;
    }
    Ok(positions.len())
}

fn render_scroll(cli: &Cli, size: Vec2) -> anyhow::Result<usize> {
    let schedule = Schedule::illustration()?;
    let end = cli.at.unwrap_or(1.0).min(1.0);
    let config = SceneConfig::illustration();
    let mut surface = SvgSurface::new(size, config.palette.background);
    let mut renderer = SceneRenderer::new(config, size.x, size.y);
    let mut driver = ScrollDriver::new(schedule);

    let positions = frame_positions(end, cli.frames);
    for (i, p) in positions.iter().enumerate() {
        let outcome = driver.scrub(*p);
        if outcome.completed_now {
            log::info!("[scroll] completed at frame {}", i);
        }
        renderer.advance_particles(1.0 / PREVIEW_FPS);
        renderer.render(&mut surface, driver.record());
        write_frame(&frame_path(&cli.out, i, cli.frames), &surface)?;
    }
    Ok(positions.len())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::info!("room-native {:?}", cli);

    if cli.width == 0 || cli.height == 0 {
        anyhow::bail!("--width and --height must be positive");
    }
    let size = Vec2::new(cli.width as f32, cli.height as f32);
    let written = match cli.mode {
        Mode::Loader => render_loader(&cli, size)?,
        Mode::Scroll => render_scroll(&cli, size)?,
    };
    log::info!("{} frame(s) rendered", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_frame_sits_at_the_end() {
        assert_eq!(frame_positions(4.2, 1), vec![4.2]);
        assert!(frame_positions(1.0, 0).is_empty());
        assert_eq!(frame_positions(-2.0, 1), vec![0.0]);
    }

    #[test]
    fn frames_are_evenly_spaced_from_zero() {
        let p = frame_positions(1.0, 5);
        assert_eq!(p, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn multi_frame_paths_get_an_index() {
        let out = Path::new("renders/room.svg");
        assert_eq!(frame_path(out, 3, 1), PathBuf::from("renders/room.svg"));
        assert_eq!(frame_path(out, 3, 10), PathBuf::from("renders/room-0003.svg"));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "room-native",
            "--mode",
            "scroll",
            "--at",
            "0.5",
            "--frames",
            "3",
            "--out",
            "x.svg",
        ]);
        assert_eq!(cli.mode, Mode::Scroll);
        assert_eq!(cli.at, Some(0.5));
        assert_eq!(cli.frames, 3);
        assert_eq!(cli.width, 1280);
    }
}
