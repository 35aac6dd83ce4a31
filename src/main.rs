use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coolerdash::render::png::write_png;
use coolerdash::{AppConfig, DeviceInfo, LcdRenderer, SensorReading};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// coolerdash - temperature dashboard renderer for cooler LCD panels
#[derive(Parser, Debug)]
#[command(name = "coolerdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(
        short = 'd',
        long = "debug",
        value_name = "LEVEL",
        default_value = "0",
        global = true
    )]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render frames from the given temperatures and write them as PNG
    Render(RenderArgs),
    /// Print the default configuration, or write it to a file
    DefaultConfig {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// CPU temperature in degrees Celsius
    #[arg(long, default_value = "0")]
    cpu: f64,

    /// GPU temperature in degrees Celsius
    #[arg(long, default_value = "0")]
    gpu: f64,

    /// Liquid temperature in degrees Celsius
    #[arg(long, default_value = "0")]
    liquid: f64,

    /// Output PNG path (defaults to the configured image path)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Device name for round panel detection (e.g. "NZXT Kraken Elite")
    #[arg(long = "device-name", value_name = "NAME")]
    device_name: Option<String>,

    /// Device panel width in pixels, defaults to the display width
    #[arg(long = "device-width", value_name = "PX")]
    device_width: Option<u32>,

    /// Device panel height in pixels, defaults to the display height
    #[arg(long = "device-height", value_name = "PX")]
    device_height: Option<u32>,

    /// Number of frames to render, numbered outputs when more than one
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,

    /// Seconds to wait between frames
    #[arg(long, default_value = "1.0")]
    interval: f64,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::DefaultConfig { output } => write_default_config(output.as_deref()),
        Command::Render(args) => {
            let config = load_config(cli.config.as_deref())?;
            render_frames(config, args)
        }
    }
}

/// Load configuration - from the given file if specified, otherwise from the default location
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let config = AppConfig::load_from_path(path)?;
            info!("Loaded config from: {}", path.display());
            Ok(config)
        }
        None => match AppConfig::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to load config, using defaults: {:#}", e);
                Ok(AppConfig::default())
            }
        },
    }
}

fn write_default_config(output: Option<&Path>) -> Result<()> {
    let config = AppConfig::default();
    match output {
        Some(path) => {
            config.save_to_path(path)?;
            info!("Wrote default config to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

fn render_frames(config: AppConfig, args: RenderArgs) -> Result<()> {
    let device = match args.device_name {
        Some(name) => Some(DeviceInfo::new(
            name,
            args.device_width.unwrap_or(config.lcd.display.width),
            args.device_height.unwrap_or(config.lcd.display.height),
        )),
        None => config.device.clone(),
    };

    let mut renderer = LcdRenderer::new();
    renderer.set_device(device);

    let reading = SensorReading::new(args.cpu, args.gpu, args.liquid);
    let output = args.output.unwrap_or_else(|| config.image_path.clone());
    let interval = Duration::try_from_secs_f64(args.interval)
        .with_context(|| format!("Invalid frame interval {}", args.interval))?;

    for frame in 0..args.frames {
        if frame > 0 {
            std::thread::sleep(interval);
        }

        let path = frame_path(&output, frame, args.frames);
        let surface = renderer
            .render(&config.lcd, &reading)
            .context("Failed to render frame")?;
        write_png(&surface, &path)?;

        info!(
            "Frame {} written to {} (slot {:?})",
            frame + 1,
            path.display(),
            renderer.circle_state().current()
        );
    }

    Ok(())
}

/// Output path for a frame: the path itself for single frames, `name-N.ext` otherwise
fn frame_path(output: &Path, frame: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return output.to_path_buf();
    }

    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match output.extension() {
        Some(ext) => format!("{}-{}.{}", stem, frame, ext.to_string_lossy()),
        None => format!("{}-{}", stem, frame),
    };
    output.with_file_name(name)
}
