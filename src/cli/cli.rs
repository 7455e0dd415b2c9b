use clap::Parser;

use crate::config::{Settings, Theme};

#[derive(Parser)]
#[command(name = "create-monolith-app")]
#[command(version)]
#[command(about = "Scaffold a full-stack pnpm monorepo from the monolith template", long_about = None)]
pub struct Cli {
    /// Name of the project to create (prompted for when omitted)
    pub name: Option<String>,

    /// Accept all defaults without prompting
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Skip the post-scaffold setup step
    #[arg(long)]
    pub no_setup: bool,

    /// Clone this template repository instead of the default
    #[arg(long, env = "CMA_TEMPLATE")]
    pub template: Option<String>,

    /// Set the color theme (dark, light or nocolor)
    #[arg(long)]
    pub theme: Option<Theme>,
}

impl Cli {
    pub fn get_effective_theme(&self, settings: &Settings) -> Theme {
        settings.get_effective_theme(self.theme)
    }
}
