use clap::Parser;
use miette::Result;
use partstock::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => partstock::cli::commands::init::run(args),
        Commands::Part(cmd) => partstock::cli::commands::part::run(cmd, &global),
        Commands::Import(args) => partstock::cli::commands::import::run(args),
        Commands::Stats(args) => partstock::cli::commands::stats::run(args, &global),
        Commands::Export(args) => partstock::cli::commands::export::run(args, &global),
        Commands::Completions(args) => partstock::cli::commands::completions::run(args),
    }
}
