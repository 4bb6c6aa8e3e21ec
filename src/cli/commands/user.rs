//! `ait user` command - Account management

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Password};
use miette::{miette, IntoDiagnostic, Result};

use crate::cli::helpers::{authenticate, open_store};
use crate::cli::{AuthOpts, GlobalOpts};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Change the account password
    Passwd(PasswdArgs),
}

#[derive(clap::Args, Debug)]
pub struct PasswdArgs {
    #[command(flatten)]
    pub auth: AuthOpts,

    /// New password (prompted for when omitted)
    #[arg(long, env = "AIT_NEW_PASSWORD", hide_env_values = true)]
    pub new_password: Option<String>,
}

/// Run a user subcommand
pub fn run(cmd: UserCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        UserCommands::Passwd(args) => run_passwd(args, global),
    }
}

fn run_passwd(args: PasswdArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = open_store(global, &config)?;
    let session = authenticate(&store, &args.auth, &config)?;

    let new_password = match args.new_password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("New password")
            .with_confirmation("Confirm new password", "Passwords do not match")
            .interact()
            .into_diagnostic()?,
    };

    session
        .set_password(&new_password)
        .map_err(|e| miette!("{}", e))?;

    if !global.quiet {
        println!(
            "{} Password updated for {}",
            style("✓").green(),
            style(session.username()).cyan()
        );
    }

    Ok(())
}
