//! Composer configuration.
//!
//! Every setting comes from a `COMPOSER_*` environment variable (a `.env`
//! file is honoured through `dotenvy` in `main`). Nothing here fails: bad
//! values fall back to their default and are reported as warnings.

use std::path::PathBuf;

use storyframe_core::types::{ContentType, VisualStyle};

use crate::job::JobDefaults;

/// Where the job JSON is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "-" => InputSource::Stdin,
            path => InputSource::File(PathBuf::from(path)),
        }
    }
}

/// Log line format for the stderr subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Composer configuration loaded from environment variables.
///
/// Every field has a default; invalid values fall back to it and leave a
/// message in `warnings`, which `main` logs once tracing is installed.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Job source (default: stdin).
    pub input: InputSource,
    /// Pretty-print the JSON result (default: `true`).
    pub pretty: bool,
    /// Log format (default: text).
    pub log_format: LogFormat,
    /// Visual style for jobs that omit one (default: `realistic`).
    pub default_style: VisualStyle,
    /// Content type for jobs that omit one (default: `storyboard`).
    pub default_content_type: ContentType,
    /// Problems found while loading, for deferred logging.
    pub warnings: Vec<String>,
}

impl ComposerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default      |
    /// |---------------------------------|--------------|
    /// | `COMPOSER_INPUT`                | `-` (stdin)  |
    /// | `COMPOSER_PRETTY`               | `true`       |
    /// | `COMPOSER_LOG_FORMAT`           | `text`       |
    /// | `COMPOSER_DEFAULT_STYLE`        | `realistic`  |
    /// | `COMPOSER_DEFAULT_CONTENT_TYPE` | `storyboard` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let input = lookup("COMPOSER_INPUT")
            .map(|v| InputSource::parse(&v))
            .unwrap_or(InputSource::Stdin);

        let pretty = match lookup("COMPOSER_PRETTY") {
            None => true,
            Some(v) => parse_bool(&v).unwrap_or_else(|| {
                warnings.push(format!("COMPOSER_PRETTY '{v}' is not a boolean, using true"));
                true
            }),
        };

        let log_format = match lookup("COMPOSER_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                warnings.push(format!("COMPOSER_LOG_FORMAT '{other}' is unknown, using text"));
                LogFormat::Text
            }
        };

        let default_style = match lookup("COMPOSER_DEFAULT_STYLE") {
            None => VisualStyle::default(),
            Some(v) => v.parse::<VisualStyle>().unwrap_or_else(|e| {
                warnings.push(format!("COMPOSER_DEFAULT_STYLE: {e}"));
                VisualStyle::default()
            }),
        };

        let default_content_type = match lookup("COMPOSER_DEFAULT_CONTENT_TYPE") {
            None => ContentType::default(),
            Some(v) => v.parse::<ContentType>().unwrap_or_else(|e| {
                warnings.push(format!("COMPOSER_DEFAULT_CONTENT_TYPE: {e}"));
                ContentType::default()
            }),
        };

        Self {
            input,
            pretty,
            log_format,
            default_style,
            default_content_type,
            warnings,
        }
    }

    /// Override the input source with the first command-line argument.
    pub fn with_input_arg(mut self, arg: Option<String>) -> Self {
        if let Some(arg) = arg {
            self.input = InputSource::parse(&arg);
        }
        self
    }

    pub fn job_defaults(&self) -> JobDefaults {
        JobDefaults {
            content_type: self.default_content_type,
            visual_style: self.default_style,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
