pub mod config;
pub mod version;

use async_trait::async_trait;
use clap::{ArgMatches, Command as ClapCommand};
use std::collections::HashMap;

pub fn build_app(registry: &CommandRegistry) -> ClapCommand {
    let mut app = ClapCommand::new("starter")
        .version(starter_lib::utils::version::VERSION)
        .about("Starter command-line tool")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            clap::Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        );

    for subcommand in registry.commands.values() {
        app = app.subcommand(subcommand.clap_command());
    }

    app
}

#[async_trait]
pub trait Command {
    fn name(&self) -> &'static str;
    async fn execute(&self, matches: &ArgMatches) -> anyhow::Result<()>;
    fn clap_command(&self) -> ClapCommand;
}

pub struct CommandRegistry {
    pub commands: HashMap<&'static str, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register<C: Command + Send + Sync + 'static>(&mut self, command: C) {
        self.commands.insert(command.name(), Box::new(command));
    }

    pub async fn execute(&self, name: &str, matches: &ArgMatches) -> anyhow::Result<()> {
        match self.commands.get(name) {
            Some(command) => command.execute(matches).await,
            None => anyhow::bail!("{} not found", name),
        }
    }
}
