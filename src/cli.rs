use crate::router::Route;
use crate::state::app_settings::AppSettings;
use cricket_api::client::DataSource;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum CliAction {
    Run,
    Help,
    Version,
}

/// Apply command-line flags on top of `settings`.
pub fn parse_args<I>(args: I, settings: &mut AppSettings) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "--base-url" => {
                let url = value_for(&arg, args.next())?;
                settings.data_source = DataSource::Http(url);
            }
            "--data-dir" => {
                let dir = value_for(&arg, args.next())?;
                settings.data_source = DataSource::Directory(PathBuf::from(dir));
            }
            "--route" => {
                let path = value_for(&arg, args.next())?;
                settings.initial_route = Route::parse(&path);
            }
            "--log-level" => {
                let level = value_for(&arg, args.next())?;
                settings.set_log_level(&level);
            }
            "--full-screen" => settings.full_screen = true,
            _ => return Err(format!("Unknown argument: {arg}")),
        }
    }
    Ok(CliAction::Run)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| format!("{flag} needs a value"))
}

pub fn usage_text() -> &'static str {
    "hctui - today's cricket matches and horoscope leaderboards

Usage:
  hctui [--base-url URL | --data-dir DIR] [--route PATH] [--log-level LEVEL] [--full-screen]
  hctui --help
  hctui --version

Routes:
  /  /leaderboard  /match/{matchId}  /how-it-works  /about  /contact

Environment:
  HCTUI_BASE_URL    Static host serving matches.json (default http://127.0.0.1:5173)
  HCTUI_DATA_DIR    Read the JSON documents from a local directory instead
  HCTUI_LOG_LEVEL   off, error, warn, info, debug or trace (default error)"
}
