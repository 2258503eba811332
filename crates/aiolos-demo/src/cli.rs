use std::path::{Path, PathBuf};

use aiolos_core::geometry::LayoutDirection;
use aiolos_panel::PanelSettings;
use clap::Parser;

use crate::error::{DemoError, Result};
use crate::logging;
use crate::policy::{Idiom, Traits, VerticalSizeClass};
use crate::script::{Demo, DemoOptions, Step};

const MAX_CYCLES: u32 = 100;

#[derive(Debug, Parser)]
#[command(
    name = "aiolos-demo",
    about = "Drive a floating panel through mode cycles, visibility toggles and rotations",
    version
)]
pub struct Cli {
    /// Device family to simulate.
    #[arg(long, value_enum, default_value_t = Idiom::Phone)]
    pub idiom: Idiom,

    /// Start in the vertically compact size class (landscape phone).
    #[arg(long)]
    pub compact_height: bool,

    /// Animate mode changes and tick them to completion.
    #[arg(long)]
    pub animated: bool,

    /// Number of full compact → expanded → full-height → compact cycles.
    #[arg(long, default_value_t = 1)]
    pub cycles: u32,

    /// Panel settings file (TOML, or JSON with a `.json` extension).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Lay out right-to-left.
    #[arg(long)]
    pub rtl: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    fn traits(&self) -> Traits {
        let vertical = if self.compact_height {
            VerticalSizeClass::Compact
        } else {
            VerticalSizeClass::Regular
        };
        Traits::new(self.idiom, vertical)
    }

    fn direction(&self) -> LayoutDirection {
        if self.rtl {
            LayoutDirection::RightToLeft
        } else {
            LayoutDirection::LeftToRight
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    for step in execute(&cli)? {
        println!("{step}");
    }
    Ok(())
}

/// Run the scripted walkthrough described by `cli` and return its steps.
pub fn execute(cli: &Cli) -> Result<Vec<Step>> {
    if cli.cycles == 0 || cli.cycles > MAX_CYCLES {
        return Err(DemoError::invalid(format!(
            "--cycles must be between 1 and {MAX_CYCLES}, got {}",
            cli.cycles
        )));
    }
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => PanelSettings::default(),
    };
    let options = DemoOptions {
        traits: cli.traits(),
        direction: cli.direction(),
        animated: cli.animated,
        settings,
    };
    Ok(Demo::new(&options).run(cli.cycles))
}

fn load_settings(path: &Path) -> Result<PanelSettings> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let loaded = if is_json {
        PanelSettings::from_json_file(path)
    } else {
        PanelSettings::from_toml_file(path)
    };
    loaded.map_err(|source| DemoError::settings(path, source))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use aiolos_core::geometry::Rect;
    use aiolos_panel::Mode;
    use clap::Parser;
    use tempfile::tempdir;

    use super::{Cli, execute, run};
    use crate::error::DemoError;
    use crate::script::Action;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aiolos-demo").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults_parse() {
        let cli = parse(&[]);
        assert_eq!(cli.cycles, 1);
        assert!(!cli.animated);
        assert!(!cli.compact_height);
        assert!(cli.settings.is_none());
    }

    #[test]
    fn unknown_idiom_is_rejected() {
        assert!(Cli::try_parse_from(["aiolos-demo", "--idiom", "watch"]).is_err());
    }

    #[test]
    fn zero_cycles_is_invalid_argument() {
        let error = execute(&parse(&["--cycles", "0"])).unwrap_err();
        assert!(matches!(error, DemoError::InvalidArgument { .. }));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn default_run_dispatches_successfully() {
        assert!(run(parse(&[])).is_ok());
    }

    #[test]
    fn pad_landscape_flags_reach_the_host() {
        let steps = execute(&parse(&["--idiom", "pad", "--cycles", "2"])).unwrap();
        assert_eq!(steps.len(), 1 + 6 + 4);
        assert_eq!(
            steps[0].geometry.map(|g| g.frame),
            Some(Rect::new(684.0, 684.0, 320.0, 64.0))
        );
    }

    #[test]
    fn settings_file_sets_initial_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        fs::write(
            &path,
            "[initial]\nmode = \"expanded\"\n\n[animation]\nduration_ms = 100\n",
        )
        .unwrap();

        let steps = execute(&parse(&[
            "--settings",
            path.to_str().unwrap(),
            "--animated",
        ]))
        .unwrap();
        assert_eq!(steps[0].geometry.map(|g| g.size().height), Some(270.0));
        assert_eq!(steps[1].action, Action::SetMode(Mode::FullHeight));
        // 100ms at 16ms per frame.
        assert_eq!(steps[1].frames, 7);
    }

    #[test]
    fn json_settings_are_detected_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("panel.json");
        fs::write(&path, r#"{"animation": {"reduced_motion": true}}"#).unwrap();
        let steps = execute(&parse(&[
            "--settings",
            path.to_str().unwrap(),
            "--animated",
        ]))
        .unwrap();
        assert!(steps.iter().all(|s| s.frames == 0));
    }

    #[test]
    fn invalid_settings_report_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        fs::write(&path, "[initial.margins]\ntop = -5.0\n").unwrap();
        let error = execute(&parse(&["--settings", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(error, DemoError::Settings { .. }));
        assert!(error.to_string().contains("panel.toml"));
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let error = execute(&parse(&["--settings", "/nonexistent/panel.toml"])).unwrap_err();
        assert_eq!(error.exit_code(), 1);
    }
}
