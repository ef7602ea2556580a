use clap::Parser;
use git_stager::commands::execute_interactive;
use git_stager::core::print_error;

const KEYS_HELP: &str = "\
Keys:
  j / k          Move down / up
  g, H / G, L    Move to first / last entry
  M              Move to middle entry
  space, enter   Stage or unstage the current entry
  d              Show or hide the diff of the current entry
  o              Open the current file in your editor and exit
  q, esc, ^C     Exit

Merge conflicts are detected but not supported; resolve them with git first.";

#[derive(Parser)]
#[command(name = "git-stager")]
#[command(about = "Stage and unstage working tree changes one keypress at a time")]
#[command(version)]
#[command(after_help = KEYS_HELP)]
struct Cli {
    /// Enable debug logging to stderr
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Anything chattier than warn would interleave with the in-place frame
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = execute_interactive() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
