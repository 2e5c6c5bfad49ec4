use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use dt::MarkerStyle;
use dt::areas::repository::Repository;
use dt::artifacts::diff::highlight::{
    DEFAULT_GRANULARITY, DEFAULT_TAB_WIDTH, HighlightOptions, Markers,
};
use dt::commands::porcelain::walk::WalkOptions;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dt",
    version = "0.1.0",
    about = "Walk a branch commit by commit and see what each one changed",
    long_about = "dt follows the history of a branch from its first commit, \
    showing each commit's message and the files it changed. \
    Any changed file can be opened as a highlighted view of its new content, \
    where only inserted or edited text is emphasised and pure re-alignment is ignored.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_GRANULARITY,
        help = "Unchanged runs shorter than this many bytes are absorbed into a highlighted edit"
    )]
    granularity: usize,

    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TAB_WIDTH as u16,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Number of spaces each tab is expanded to (at least 1)"
    )]
    tab_width: u16,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = MarkerStyle::Ansi,
        help = "How highlighted spans are marked"
    )]
    markers: MarkerStyle,

    #[arg(long, global = true, help = "Write to stdout instead of paging")]
    no_pager: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log more (-v debug, -vv trace)"
    )]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "walk",
        about = "Interactively walk the commits of a branch",
        long_about = "This command walks the history leading to the given revision, oldest commit first. \
        At each commit, pick a changed file to view its highlighted diff, \
        move with n/p, run the project with r, or quit with q."
    )]
    Walk {
        #[arg(index = 1, help = "The revision whose history is walked")]
        head: String,
        #[arg(
            long,
            num_args = 1..,
            allow_hyphen_values = true,
            default_values = ["cargo", "run"],
            help = "The command and arguments started by the r choice, after checking out \
            the current commit; every value after --run belongs to the command"
        )]
        run: Vec<String>,
    },
    #[command(
        name = "show",
        about = "Show the highlighted change of one file in one commit",
        long_about = "This command compares a file at the given revision with the same file \
        at its first parent, and shows the new content with changes highlighted."
    )]
    Show {
        #[arg(index = 1, help = "The revision to show")]
        rev: String,
        #[arg(index = 2, help = "The file path, relative to the repository root")]
        path: PathBuf,
    },
    #[command(
        name = "highlight",
        about = "Highlight the changes between two files",
        long_about = "This command shows the content of AFTER with everything that changed \
        relative to BEFORE highlighted."
    )]
    Highlight {
        #[arg(index = 1)]
        before: PathBuf,
        #[arg(index = 2)]
        after: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let highlight = HighlightOptions::new(
        Markers::from(cli.markers),
        cli.granularity,
        usize::from(cli.tab_width),
    );
    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
        .with_paging(!cli.no_pager);

    match &cli.command {
        Commands::Walk { head, run } => {
            let opts = WalkOptions {
                head: head.clone(),
                run: run.clone(),
                highlight,
            };

            repository.walk(&opts).await?
        }
        Commands::Show { rev, path } => repository.show(rev, path, &highlight).await?,
        Commands::Highlight { before, after } => {
            repository.highlight_files(before, after, &highlight).await?
        }
    }

    Ok(())
}
