use crate::commands::config::ConfigCommand;
use crate::commands::version::VersionCommand;
use crate::commands::CommandRegistry;
use env_logger::Env;
use log::error;

mod commands;

#[tokio::main]
async fn main() {
    let mut registry = CommandRegistry::new();
    registry.register(VersionCommand);
    registry.register(ConfigCommand);

    let app = commands::build_app(&registry);
    let matches = app.get_matches();

    let level = if matches.get_flag("debug") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Some((name, sub_matches)) = matches.subcommand() {
        if let Err(err) = registry.execute(name, sub_matches).await {
            error!("{:#}", err);
            std::process::exit(1);
        }
    } else {
        error!("No command found");
    }
}
