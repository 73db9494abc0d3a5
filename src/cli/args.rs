use clap::{ArgAction, Parser};

const EXAMPLES: &str = "\
Examples:
  sagmal Bonjour tout le monde
  sagmal de: Hallo Welt!
  sagmal :it It's not a bug, it's a feature
  sagmal I have made a terrible mistake :ja
  sagmal fr:ar Je pense, donc je suis
  sagmal ja: 私は大丈夫です :zh-HANT
  sagmal 404 Motivation Not Found en:de";

#[derive(Parser, Debug)]
#[command(name = "sagmal")]
#[command(about = "Translate text with DeepL, straight from the command line")]
#[command(override_usage = "sagmal [options] [languages] <text>")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Args {
    /// Text to translate, optionally starting and/or ending with a
    /// `source:target` language option (e.g. `ja:`, `:en`, `fr:de`)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Copy the translation to the clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Suppress the progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter matching the verbosity flags.
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sagmal").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_positionals_are_collected() {
        let args = parse(&["de:", "Hallo", "Welt!"]);
        assert_eq!(args.text, vec!["de:", "Hallo", "Welt!"]);
        assert!(!args.copy);
    }

    #[test]
    fn test_copy_flag_anywhere() {
        let args = parse(&["hello", "-c", ":ja"]);
        assert!(args.copy);
        assert_eq!(args.text, vec!["hello", ":ja"]);
    }

    #[test]
    fn test_double_dash_allows_leading_hyphen_text() {
        let args = parse(&["--", "-5", "degrees"]);
        assert_eq!(args.text, vec!["-5", "degrees"]);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&[]).log_level(), "warn");
        assert_eq!(parse(&["-v"]).log_level(), "debug");
        assert_eq!(parse(&["-vv"]).log_level(), "trace");
    }
}
