//! Command-line argument parsing for the Ihsan CLI.
//!
//! Arguments are parsed by hand: the command set is small and every
//! command takes at most one positional value plus a couple of flags.

use std::path::PathBuf;

use crate::capture::PlatformCapabilities;

/// Which delivery chain `save`/`share` should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformArg {
    #[default]
    Desktop,
    /// Touch host whose share sheet takes images only.
    ImageOnly,
    /// Touch host with a full file share sheet.
    FileShare,
}

impl PlatformArg {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "desktop" => Some(PlatformArg::Desktop),
            "image-only" => Some(PlatformArg::ImageOnly),
            "file-share" => Some(PlatformArg::FileShare),
            _ => None,
        }
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        match self {
            PlatformArg::Desktop => PlatformCapabilities::desktop(),
            PlatformArg::ImageOnly => PlatformCapabilities::image_only_share(false),
            PlatformArg::FileShare => PlatformCapabilities::file_share_sheet(false),
        }
    }
}

/// Options shared by `save` and `share`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureArgs {
    /// Host-rendered snapshot of the card.
    pub image: PathBuf,
    pub id: Option<String>,
    pub platform: PlatformArg,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Log today's visit
    Visit,
    /// Count one recitation of a phrase
    Tally { phrase: String },
    /// Show a phrase's tally stats
    Stats { phrase: String },
    /// Toggle a favorite
    Favorite { id: String },
    /// List favorites
    Favorites,
    /// List recent views
    History,
    /// Show an item and record the view
    View { id: String },
    /// List or search the 99 Names
    Names { query: Option<String> },
    /// Render and save a card image
    Save(CaptureArgs),
    /// Render and share a card image
    Share(CaptureArgs),
    /// Arguments could not be understood
    Invalid(String),
}

pub const USAGE: &str = "\
usage: ihsan <command>

  visit                         log today's visit
  tally <phrase>                count one recitation
  stats <phrase>                show today/streak/month for a phrase
  favorite <id>                 toggle a favorite
  favorites                     list favorites
  history                       list recent views
  view <id>                     show an item and record the view
  names [query]                 list or search the 99 Names
  save --image <png> [--id <id>] [--platform <p>]
  share <id> --image <png> [--platform <p>]

  --platform: desktop (default), image-only, file-share
  -V, --version                 print version";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use ihsan::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ihsan".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "visit" => no_args("visit", rest, CliCommand::Visit),
        "favorites" => no_args("favorites", rest, CliCommand::Favorites),
        "history" => no_args("history", rest, CliCommand::History),
        "tally" => one_arg("tally", "<phrase>", rest).map_or_else(CliCommand::Invalid, |phrase| {
            CliCommand::Tally { phrase }
        }),
        "stats" => one_arg("stats", "<phrase>", rest).map_or_else(CliCommand::Invalid, |phrase| {
            CliCommand::Stats { phrase }
        }),
        "favorite" => {
            one_arg("favorite", "<id>", rest).map_or_else(CliCommand::Invalid, |id| {
                CliCommand::Favorite { id }
            })
        }
        "view" => one_arg("view", "<id>", rest)
            .map_or_else(CliCommand::Invalid, |id| CliCommand::View { id }),
        "names" => match rest {
            [] => CliCommand::Names { query: None },
            _ => CliCommand::Names {
                query: Some(rest.join(" ")),
            },
        },
        "save" => parse_capture(rest, false).map_or_else(CliCommand::Invalid, CliCommand::Save),
        "share" => parse_capture(rest, true).map_or_else(CliCommand::Invalid, CliCommand::Share),
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn no_args(name: &str, rest: &[String], command: CliCommand) -> CliCommand {
    if rest.is_empty() {
        command
    } else {
        CliCommand::Invalid(format!("'{}' takes no arguments", name))
    }
}

fn one_arg(name: &str, what: &str, rest: &[String]) -> Result<String, String> {
    match rest {
        [value] => Ok(value.clone()),
        _ => Err(format!("usage: ihsan {} {}", name, what)),
    }
}

fn parse_capture(rest: &[String], id_positional: bool) -> Result<CaptureArgs, String> {
    let mut image = None;
    let mut id = None;
    let mut platform = PlatformArg::default();

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--image" => {
                let value = iter.next().ok_or("--image needs a path")?;
                image = Some(PathBuf::from(value));
            }
            "--id" => {
                let value = iter.next().ok_or("--id needs a content id")?;
                id = Some(value.clone());
            }
            "--platform" => {
                let value = iter.next().ok_or("--platform needs a value")?;
                platform = PlatformArg::parse(value)
                    .ok_or_else(|| format!("unknown platform '{}'", value))?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
            positional if id_positional && id.is_none() => id = Some(positional.to_string()),
            positional => return Err(format!("unexpected argument '{}'", positional)),
        }
    }

    let image = image.ok_or("--image <png> is required")?;
    if id_positional && id.is_none() {
        return Err("usage: ihsan share <id> --image <png>".to_string());
    }
    Ok(CaptureArgs {
        image,
        id,
        platform,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["ihsan".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["visit", "--version"]), CliCommand::Version);
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse(&["visit"]), CliCommand::Visit);
        assert_eq!(parse(&["favorites"]), CliCommand::Favorites);
        assert_eq!(parse(&["history"]), CliCommand::History);
        assert_eq!(
            parse(&["tally", "salawat"]),
            CliCommand::Tally {
                phrase: "salawat".to_string()
            }
        );
        assert_eq!(
            parse(&["view", "name-3"]),
            CliCommand::View {
                id: "name-3".to_string()
            }
        );
    }

    #[test]
    fn test_names_query_joins_words() {
        assert_eq!(parse(&["names"]), CliCommand::Names { query: None });
        assert_eq!(
            parse(&["names", "al", "malik"]),
            CliCommand::Names {
                query: Some("al malik".to_string())
            }
        );
    }

    #[test]
    fn test_save_flags() {
        let cmd = parse(&["save", "--image", "card.png", "--id", "d1", "--platform", "image-only"]);
        assert_eq!(
            cmd,
            CliCommand::Save(CaptureArgs {
                image: PathBuf::from("card.png"),
                id: Some("d1".to_string()),
                platform: PlatformArg::ImageOnly,
            })
        );
    }

    #[test]
    fn test_share_needs_id_and_image() {
        assert!(matches!(parse(&["share", "--image", "x.png"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["share", "d1"]), CliCommand::Invalid(_)));
        assert_eq!(
            parse(&["share", "d1", "--image", "x.png"]),
            CliCommand::Share(CaptureArgs {
                image: PathBuf::from("x.png"),
                id: Some("d1".to_string()),
                platform: PlatformArg::Desktop,
            })
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(parse(&["dance"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["visit", "now"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["tally"]), CliCommand::Invalid(_)));
        assert!(matches!(
            parse(&["save", "--image", "a.png", "--platform", "tv"]),
            CliCommand::Invalid(_)
        ));
    }
}
