#![deny(unsafe_code)]
//! CLI binary for the lumen shader demo.
//!
//! Subcommands:
//! - `render` — shade one frame on the CPU and write a PNG (at most 8192 px per side)
//! - `pointer <x> <y>` — show the uniforms a pointer event produces
//! - `shaders` — print the GLSL sources of a variant
//! - `list` — print available variants

mod error;
mod snapshot;

use clap::{Parser, Subcommand};
use error::CliError;
use lumen_core::render::{fragment_source, FULLSCREEN_VERTEX_SHADER};
use lumen_core::{PointerEvent, PointerState, SessionConfig, SurfaceSize, Variant};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lumen", about = "Fullscreen shader demo CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shade one frame and write it as a PNG.
    Render {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,

        /// Pointer position as X,Y in top-left-origin pixels. Omit for no event.
        #[arg(short, long, value_parser = parse_point)]
        pointer: Option<(f32, f32)>,

        /// Session config as a JSON object (variant, clear_color, min_diagonal).
        #[arg(long, default_value = "{}")]
        config: String,

        /// Variant name; overrides the config's `variant`.
        #[arg(short, long)]
        variant: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Convert a pointer event to the uniforms the gradient shader receives.
    Pointer {
        x: f32,
        y: f32,

        #[arg(short = 'W', long, default_value_t = 800)]
        width: u32,

        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,
    },
    /// Print the vertex and fragment sources for a variant.
    Shaders {
        #[arg(short, long, default_value = "interactive")]
        variant: String,
    },
    /// List available variants.
    List,
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Largest accepted side for `render`; the CPU frame is `w * h * 4` bytes.
const MAX_RENDER_SIDE: u32 = 8192;

fn render_surface(width: u32, height: u32) -> Result<SurfaceSize, CliError> {
    if width > MAX_RENDER_SIDE || height > MAX_RENDER_SIDE {
        return Err(CliError::Input(format!(
            "render size {width}x{height} exceeds the {MAX_RENDER_SIDE}x{MAX_RENDER_SIDE} limit"
        )));
    }
    Ok(SurfaceSize::new(width, height)?)
}

fn session_config(config: &str, variant: Option<&str>) -> Result<SessionConfig, CliError> {
    let mut params: serde_json::Value = serde_json::from_str(config)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    if let Some(name) = variant {
        match params.as_object_mut() {
            Some(obj) => {
                obj.insert("variant".into(), name.into());
            }
            None => return Err(CliError::Input("--config must be a JSON object".into())),
        }
    }
    Ok(SessionConfig::from_json(&params)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let variants = Variant::list_names();
            if cli.json {
                let info = serde_json::json!({ "variants": variants });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Variants:");
                for name in variants {
                    println!("  {name}");
                }
            }
        }
        Command::Shaders { variant } => {
            let variant = Variant::from_name(&variant)?;
            let fragment = fragment_source(variant);
            if cli.json {
                let info = serde_json::json!({
                    "variant": variant,
                    "vertex": FULLSCREEN_VERTEX_SHADER,
                    "fragment": fragment,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("// vertex\n{FULLSCREEN_VERTEX_SHADER}");
                println!("// fragment ({})\n{fragment}", variant.name());
            }
        }
        Command::Pointer {
            x,
            y,
            width,
            height,
        } => {
            let surface = SurfaceSize::new(width, height)?;
            let mut pointer = PointerState::new();
            pointer.apply(&PointerEvent { x, y, surface });
            if cli.json {
                let info = serde_json::json!({
                    "surface": surface,
                    "pointer": pointer,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let p = pointer.position();
                println!(
                    "position ({}, {}) diagonal {}",
                    p.x,
                    p.y,
                    pointer.diagonal()
                );
            }
        }
        Command::Render {
            width,
            height,
            pointer,
            config,
            variant,
            output,
        } => {
            let surface = render_surface(width, height)?;
            let config = session_config(&config, variant.as_deref())?;

            let mut state = PointerState::new();
            if let Some((x, y)) = pointer {
                state.apply(&PointerEvent { x, y, surface });
            }

            log::debug!("rendering {config:?} at {width}x{height}");
            snapshot::write_png(&config, surface, &state, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "surface": surface,
                    "pointer": state,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                log::info!(
                    "rendered {} ({width}x{height}) -> {}",
                    config.variant.name(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            log::error!("{e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_comma_pair() {
        assert_eq!(parse_point("100,50"), Ok((100.0, 50.0)));
        assert_eq!(parse_point(" 1.5 , 2 "), Ok((1.5, 2.0)));
    }

    #[test]
    fn parse_point_rejects_malformed_input() {
        assert!(parse_point("100").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn session_config_variant_flag_overrides_json() {
        let config = session_config(r#"{"variant": "interactive"}"#, Some("static")).unwrap();
        assert_eq!(config.variant, Variant::Static);
    }

    #[test]
    fn session_config_rejects_non_object_with_variant() {
        let err = session_config("[]", Some("static")).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn session_config_unknown_variant_is_input_error() {
        let err = session_config("{}", Some("sparkly")).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn render_surface_accepts_limit() {
        let s = render_surface(MAX_RENDER_SIDE, MAX_RENDER_SIDE).unwrap();
        assert_eq!(s.width(), MAX_RENDER_SIDE);
    }

    #[test]
    fn render_surface_rejects_oversized_sides_as_input_error() {
        let err = render_surface(100_000, 100_000).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("100000x100000"));
        assert_eq!(render_surface(800, MAX_RENDER_SIDE + 1).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn render_surface_zero_is_render_error() {
        assert_eq!(render_surface(0, 600).unwrap_err().exit_code(), 10);
    }

    #[test]
    fn cli_parses_render_with_pointer() {
        let cli = Cli::try_parse_from([
            "lumen", "render", "-W", "800", "-H", "600", "--pointer", "100,50",
        ])
        .unwrap();
        match cli.command {
            Command::Render { pointer, width, .. } => {
                assert_eq!(pointer, Some((100.0, 50.0)));
                assert_eq!(width, 800);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
