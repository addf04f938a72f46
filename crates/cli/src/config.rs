//! Resolves render options: defaults, then an options file, then flags.

use crate::{commands::FormatArgs, error::CliError};
use pg_render::{KeywordCase, RenderOptions};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub fn resolve(args: &FormatArgs) -> Result<RenderOptions, CliError> {
    resolve_with_default(args, default_options_path())
}

/// `<config dir>/pgrender/options.json`, if it exists.
fn default_options_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("pgrender").join("options.json");
    path.is_file().then_some(path)
}

fn resolve_with_default(
    args: &FormatArgs,
    default_path: Option<PathBuf>,
) -> Result<RenderOptions, CliError> {
    let path = args.options.as_ref().map(PathBuf::from).or(default_path);

    let mut options = match path {
        Some(path) => load_options(&path)?,
        None => RenderOptions::default(),
    };
    apply_flags(&mut options, args);

    debug!(?options, "resolved render options");
    Ok(options)
}

fn load_options(path: &Path) -> Result<RenderOptions, CliError> {
    let config_error = |reason: String| CliError::Config {
        path: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
}

fn apply_flags(options: &mut RenderOptions, args: &FormatArgs) {
    if args.lowercase {
        options.keyword_case = KeywordCase::Lower;
    }
    if args.parameterized {
        options.parameterized = true;
    }
    if args.compact {
        options.line_breaks = false;
    }
    if let Some(unit) = &args.indent_unit {
        options.indent_unit = unit.clone();
    }
}
