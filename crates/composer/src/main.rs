//! `storyframe-composer` -- batch front-end for the prompt engine.
//!
//! Reads one JSON job (file path argument, `COMPOSER_INPUT`, or stdin),
//! composes the prompts, and writes the JSON result to stdout. Logs go
//! to stderr.
//!
//! # Environment variables
//!
//! | Variable                        | Default      | Description                       |
//! |---------------------------------|--------------|-----------------------------------|
//! | `COMPOSER_INPUT`                | `-`          | Job file path, `-` for stdin      |
//! | `COMPOSER_PRETTY`               | `true`       | Pretty-print the JSON result      |
//! | `COMPOSER_LOG_FORMAT`           | `text`       | `text` or `json` log lines        |
//! | `COMPOSER_DEFAULT_STYLE`        | `realistic`  | Visual style when a job omits it  |
//! | `COMPOSER_DEFAULT_CONTENT_TYPE` | `storyboard` | Content type when a job omits it  |

use std::io::{Read, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyframe_composer::config::{ComposerConfig, InputSource, LogFormat};
use storyframe_composer::job;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ComposerConfig::from_env().with_input_arg(std::env::args().nth(1));

    // --- Tracing ---
    let (text_layer, json_layer) = match config.log_format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyframe_composer=info,storyframe_core=warn".into()),
        )
        .with(text_layer)
        .with(json_layer)
        .init();

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(input = ?config.input, pretty = config.pretty, "Loaded composer configuration");

    // --- Job ---
    let raw = read_input(&config.input)?;
    let output = job::compose(&raw, &config.job_defaults()).context("Failed to compose job")?;

    let encoded = if config.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to encode job output")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{encoded}").context("Failed to write job output")?;

    tracing::info!(bytes = encoded.len(), "Job composed");
    Ok(())
}

fn read_input(source: &InputSource) -> anyhow::Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read job from stdin")?;
            Ok(buf)
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display())),
    }
}
