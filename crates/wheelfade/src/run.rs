use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cycler::{FadeDriver, FrameSnapshot};
use fadeconfig::FadeConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{CheckArgs, RunArgs, VariantsArgs};
use crate::script;
use crate::textures;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> Result<(FadeConfig, PathBuf)> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config = FadeConfig::from_toml_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((config, base))
}

pub fn run(args: RunArgs) -> Result<()> {
    let Some(config_path) = args.config.as_ref() else {
        bail!("no configuration supplied; pass a fade config TOML file (see `wheelfade --help`)");
    };
    let (mut config, base) = load_config(config_path)?;

    if let Some(scale) = args.scroll_scale {
        config.scroll_scale = scale;
        config
            .validate()
            .context("invalid --scroll-scale override")?;
    }

    if args.skip_textures {
        tracing::warn!("texture decoding skipped (--skip-textures)");
    } else {
        let set = textures::load_textures(&base, &config.textures)?;
        tracing::info!(textures = set.len(), "decoded texture ring");
    }

    let mut driver = FadeDriver::from_config(&config, args.variant.as_deref())?;
    tracing::info!(
        variant = driver.profile().name(),
        slots = driver.ring().len(),
        scroll_scale = config.scroll_scale,
        "fade driver ready"
    );

    let deltas = match args.script.as_ref() {
        Some(path) => script::load_script(path)?,
        None => {
            tracing::info!("no scroll script supplied; replaying built-in demo sweep");
            script::demo_sweep(config.scroll_scale)
        }
    };

    let mut cycles = 0usize;
    for (frame_index, delta) in deltas.iter().copied().enumerate() {
        if let Some(event) = driver.handle_scroll(delta) {
            cycles += 1;
            tracing::info!(
                direction = %event.direction,
                index = event.current_index,
                outgoing = %event.outgoing,
                incoming = %event.incoming,
                "cycle boundary crossed"
            );
        }
        let frame = driver.frame();
        if args.json {
            println!("{}", frame_json(frame_index, delta, &frame));
        } else {
            print_frame(frame_index, delta, &frame);
        }
    }

    tracing::info!(frames = deltas.len(), cycles, "replay complete");
    Ok(())
}

pub fn check(args: CheckArgs) -> Result<()> {
    let (config, base) = load_config(&args.config)?;
    println!(
        "Configuration OK: {} textures, {} variants",
        config.textures.len(),
        config.variants.len()
    );

    let set = textures::load_textures(&base, &config.textures)?;
    for entry in &config.textures {
        if let Some(texture) = set.get(&entry.name) {
            println!(
                "  texture {:<12} {}x{}  {}",
                texture.name,
                texture.width,
                texture.height,
                texture.path.display()
            );
        }
    }
    Ok(())
}

pub fn variants(args: VariantsArgs) -> Result<()> {
    let (config, _) = load_config(&args.config)?;
    for (name, variant) in &config.variants {
        let marker = if config.default_variant() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!("{name}{marker}");
        for uniform in &variant.uniforms {
            match &uniform.control {
                Some(control) => println!(
                    "  {:<14} min={} max={} step={} segments={}",
                    uniform.name,
                    control.min,
                    control.max,
                    control.step,
                    uniform.segments.len()
                ),
                None => println!(
                    "  {:<14} segments={}",
                    uniform.name,
                    uniform.segments.len()
                ),
            }
        }
    }
    Ok(())
}

fn print_frame(index: usize, delta: f32, frame: &FrameSnapshot) {
    let uniforms = frame
        .uniforms
        .iter()
        .map(|u| format!("{}={:.3}", u.name, u.value))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "[{index:>4}] delta={delta:>9.1} progress={:.4} out={:<10} in={:<10} {uniforms}",
        frame.progress, frame.outgoing, frame.incoming
    );
}

fn frame_json(index: usize, delta: f32, frame: &FrameSnapshot) -> String {
    let uniforms: serde_json::Map<String, serde_json::Value> = frame
        .uniforms
        .iter()
        .map(|u| (u.name.clone(), serde_json::Value::from(u.value)))
        .collect();
    serde_json::json!({
        "frame": index,
        "delta": delta,
        "progress": frame.progress,
        "outgoing": frame.outgoing,
        "incoming": frame.incoming,
        "uniforms": uniforms,
    })
    .to_string()
}
