// scopetree: scope checking and AST construction for a toy C-like language

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scopetree::parser::Parser;
use scopetree::semantic::{Analysis, Analyzer, Diagnostics};
use scopetree::ui::App;

#[derive(clap::Parser)]
#[clap(
    name = "scopetree",
    about = "Check scopes and build the syntax tree of a C-like source file"
)]
struct Args {
    /// Source file to analyze
    file: PathBuf,

    /// Where to write the preorder tree
    #[clap(long, default_value = "ast_output.txt")]
    output: PathBuf,

    /// Do not write the preorder tree to disk
    #[clap(long, conflicts_with = "output")]
    no_artifact: bool,

    /// Open the interactive viewer after printing the results
    #[clap(long)]
    view: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<u8> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read '{}'", args.file.display()))?;
    info!(file = %args.file.display(), bytes = source.len(), "analyzing");

    // Diagnostics print as they are found
    let analyzer = Analyzer::with_diagnostics(Diagnostics::echoing());
    let analysis = analyzer.run(&mut Parser::reductions(&source));

    print_results(&analysis);

    if let Some(text) = analysis.preorder() {
        if !args.no_artifact {
            fs::write(&args.output, format!("{text}\n"))
                .with_context(|| format!("cannot write '{}'", args.output.display()))?;
            info!(path = %args.output.display(), "preorder written");
        }
    }

    let code = analysis.exit_code() as u8;

    if args.view {
        view(source, analysis)?;
    }

    Ok(code)
}

fn print_results(analysis: &Analysis) {
    println!();
    print!("{}", analysis.report);
    println!();

    match (&analysis.root, &analysis.failure) {
        (Some(_), _) => {
            println!("Preorder traversal of the syntax tree:");
            if let Some(text) = analysis.preorder() {
                println!("{text}");
            }
        }
        (None, Some(failure)) => println!("No syntax tree: {failure}"),
        (None, None) => println!("No syntax tree"),
    }
}

fn view(source: String, analysis: Analysis) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, analysis);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")
}
