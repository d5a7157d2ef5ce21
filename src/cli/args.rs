use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for quizcli
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "quizcli")]
#[command(about = "An interactive command-line quiz trainer")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// YAML file to keep the quizzes in (in-memory store when omitted)
    #[arg(long, value_name = "PATH", env = "QUIZCLI_STORE")]
    pub store: Option<PathBuf>,

    /// Start without the sample quizzes
    #[arg(long)]
    pub empty: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_off() {
        let args = Args::try_parse_from(["quizcli"]).unwrap();
        assert!(!args.empty);
        assert!(!args.no_color);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_store_and_flags() {
        let args =
            Args::try_parse_from(["quizcli", "--store", "/tmp/q.yaml", "--empty", "-v"]).unwrap();
        assert_eq!(args.store, Some(PathBuf::from("/tmp/q.yaml")));
        assert!(args.empty);
        assert!(args.verbose);
    }
}
