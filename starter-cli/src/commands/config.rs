use crate::commands::Command;
use anyhow::Context;
use async_trait::async_trait;
use clap::{ArgMatches, Command as ClapCommand};
use starter_lib::config::Config;

pub struct ConfigCommand;

#[async_trait]
impl Command for ConfigCommand {
    fn name(&self) -> &'static str {
        "config"
    }

    async fn execute(&self, _matches: &ArgMatches) -> anyhow::Result<()> {
        let config = Config::load().context("Failed to load configuration")?;
        print!("{}", render(&config)?);
        Ok(())
    }

    fn clap_command(&self) -> ClapCommand {
        ClapCommand::new(self.name()).about("Show the effective configuration")
    }
}

fn render(config: &Config) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("Failed to render configuration")
}
