use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::options;
use crate::render::{Render, TerminalRenderer, Theme};
use crate::ring::Ring;
use crate::spin::{SpinOutcome, Spinner};
use crate::terminal;

/// Everything the spin command needs from the command line.
pub struct SpinRequest<'a> {
    pub file: &'a Path,
    pub config_path: Option<&'a Path>,
    pub overrides: Config,
    pub seed: Option<u64>,
}

pub fn run(request: SpinRequest<'_>) -> Result<()> {
    let config = Config::load(request.config_path)?.merge(request.overrides);
    let mut renderer = TerminalRenderer::new(io::stdout(), Theme::default());

    spin_file(request.file, &config, request.seed, &mut renderer)?;

    terminal::hold(config.settle());
    Ok(())
}

/// Load the options in `file` and spin them once through `renderer`.
///
/// Nothing is rendered if the file can't be read, has no options, or the
/// configured step range or window is invalid.
pub fn spin_file<R: Render<String>>(
    file: &Path,
    config: &Config,
    seed: Option<u64>,
    renderer: &mut R,
) -> Result<String> {
    let spin_options = config.spin_options();
    spin_options.validate()?;

    let values = options::load_options(file)?;
    let ring = Ring::build(values)?;

    let mut spinner = match seed {
        Some(seed) => Spinner::with_seed(seed),
        None => Spinner::default(),
    };
    let SpinOutcome { result, frames, .. } = spinner
        .spin(&ring, &spin_options, renderer)
        .context("Failed to spin")?;

    let chosen = ring.get(result).clone();
    info!(path = ?file, frames, chosen = %chosen, "spin:finished");
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Frames(Vec<String>);

    impl Render<String> for Frames {
        fn render(&mut self, _: &[String], current: &String, _: &[String]) -> io::Result<()> {
            self.0.push(current.clone());
            Ok(())
        }
    }

    fn quick_config() -> Config {
        Config {
            min_steps: Some(3),
            max_steps: Some(8),
            delay_ms: Some(0),
            settle_secs: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn spins_options_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "alpha\n\n  \nbeta\ngamma\n").unwrap();

        let mut frames = Frames::default();
        let chosen = spin_file(&path, &quick_config(), Some(1), &mut frames).unwrap();

        assert!(["alpha", "beta", "gamma"].contains(&chosen.as_str()));
        assert!((3..8).contains(&frames.0.len()));
        assert_eq!(frames.0.last(), Some(&chosen));
    }

    #[test]
    fn blank_file_is_rejected_without_rendering() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, "\n \n\t\n").unwrap();

        let mut frames = Frames::default();
        let err = spin_file(&path, &quick_config(), None, &mut frames).unwrap_err();

        assert!(format!("{err:#}").starts_with("no options found in file"));
        assert!(frames.0.is_empty());
    }

    #[test]
    fn missing_file_is_rejected_without_rendering() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let mut frames = Frames::default();
        let err = spin_file(&path, &quick_config(), None, &mut frames).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.starts_with("failed to read file"));
        assert!(frames.0.is_empty());
    }

    #[test]
    fn invalid_step_range_is_rejected_before_loading() {
        let config = Config {
            min_steps: Some(10),
            max_steps: Some(10),
            ..quick_config()
        };

        let mut frames = Frames::default();
        let err = spin_file(Path::new("/nonexistent"), &config, None, &mut frames).unwrap_err();

        assert!(format!("{err}").starts_with("invalid step range"));
        assert!(frames.0.is_empty());
    }

    #[test]
    fn oversized_window_is_rejected_before_loading() {
        let config = Config {
            window: Some(1_000_000),
            ..quick_config()
        };

        let mut frames = Frames::default();
        let err = spin_file(Path::new("/nonexistent"), &config, None, &mut frames).unwrap_err();

        assert!(format!("{err}").starts_with("window of 1000000 is too wide"));
        assert!(frames.0.is_empty());
    }
}
