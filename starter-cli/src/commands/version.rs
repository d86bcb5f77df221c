use crate::commands::Command;
use anyhow::Context;
use async_trait::async_trait;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use colored::Colorize;
use log::debug;
use starter_lib::config::Config;
use starter_lib::utils::version::VERSION;
use starter_lib::{ReleaseChecker, ReleaseStatus};

pub struct VersionCommand;

#[async_trait]
impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    async fn execute(&self, matches: &ArgMatches) -> anyhow::Result<()> {
        println!("{} {}", "starter".bold(), VERSION);
        if matches.get_flag("offline") {
            return Ok(());
        }

        let config = Config::load().context("Failed to load configuration")?;
        debug!("Checking {}", config.release.latest_release_url());
        let checker = ReleaseChecker::new(config.release, VERSION)?;
        let status = checker
            .check()
            .await
            .context("Failed to check for the latest release")?;

        if status.is_latest() {
            println!("{}", status_message(&status).green());
        } else {
            println!("{}", status_message(&status).yellow());
        }
        Ok(())
    }

    fn clap_command(&self) -> ClapCommand {
        ClapCommand::new(self.name())
            .about("Show the version and check whether it is the latest release")
            .arg(
                Arg::new("offline")
                    .long("offline")
                    .help("Only print the version, skip the release check")
                    .action(ArgAction::SetTrue),
            )
    }
}

fn status_message(status: &ReleaseStatus) -> String {
    if status.is_latest() {
        format!("✓ {} is the latest release", status.current)
    } else {
        format!(
            "⚠️  A newer release is available: {} (running {})",
            status.latest, status.current
        )
    }
}
