use ait::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

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
        Commands::Init(args) => ait::cli::commands::init::run(args, &global),
        Commands::Asset(cmd) => ait::cli::commands::asset::run(cmd, &global),
        Commands::Item(cmd) => ait::cli::commands::item::run(cmd, &global),
        Commands::Export(args) => ait::cli::commands::export::run(args, &global),
        Commands::User(cmd) => ait::cli::commands::user::run(cmd, &global),
        Commands::Completions(args) => ait::cli::commands::completions::run(args),
    }
}
