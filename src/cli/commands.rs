use anyhow::Result;
use std::env;

use crate::cli::Cli;
use crate::config::{Settings, DEFAULT_TEMPLATE_REPO};
use crate::execution::{clone_template, reinit_repo, run_setup};
use crate::identity::ProjectIdentity;
use crate::output;
use crate::prompt;
use crate::template::{configure_env_example, rename_project, DbCredentials};

impl Cli {
    pub fn execute(self) -> Result<()> {
        let settings = Settings::new()?;
        output::init(self.get_effective_theme(&settings));

        output::plain("");
        output::plain(&format!(
            "  {}",
            output::bold(&output::cyan("create-monolith-app"))
        ));
        output::plain(&format!(
            "  {}",
            output::dim("Full-stack monorepo scaffolder")
        ));
        output::plain("");

        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompt::ask("What is your project name?")?,
        };
        if name.trim().is_empty() {
            output::error("Project name is required.");
            output::plain(&format!(
                "  Usage: {} <project-name> [--yes] [--no-setup]",
                output::cyan("create-monolith-app")
            ));
            std::process::exit(1);
        }

        let identity = ProjectIdentity::derive(&name);
        let project_dir = env::current_dir()?.join(&identity.kebab);
        if project_dir.exists() {
            output::error(&format!(
                "Directory \"{}\" already exists.",
                identity.kebab
            ));
            std::process::exit(1);
        }

        let (db, should_setup) = self.collect_answers(&identity)?;

        output::plain("");
        output::info(&format!("Creating {} ...", output::bold(&identity.kebab)));

        let total_steps = if should_setup { 5 } else { 4 };

        output::step(1, total_steps, "Downloading template...");
        let template_repo = self
            .template
            .clone()
            .or_else(|| settings.template.clone())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_REPO.to_string());
        if let Err(err) = clone_template(&template_repo, &project_dir) {
            output::error(&format!("Failed to clone template: {:#}", err));
            std::process::exit(1);
        }
        output::success("Template downloaded.");

        output::step(2, total_steps, "Initializing git...");
        match reinit_repo(&project_dir) {
            Ok(()) => output::success("Git initialized."),
            // A failed re-init leaves a usable tree; warn and continue.
            Err(err) => output::warn(&format!("Could not reinitialize git: {:#}", err)),
        }

        output::step(3, total_steps, &format!("Renaming to \"{}\"...", identity.kebab));
        rename_project(&project_dir, &identity, &db)?;
        output::success(&format!("Project renamed to \"{}\".", identity.kebab));

        output::step(4, total_steps, "Configuring environment...");
        configure_env_example(&project_dir, &db)?;
        output::success("Environment configured.");

        if should_setup {
            output::step(5, total_steps, "Running setup...");
            output::plain("");
            if let Err(err) = run_setup(&project_dir) {
                output::plain("");
                output::error(&format!(
                    "Setup failed: {:#}. You can run it manually later with: pnpm setup",
                    err
                ));
            }
        }

        print_epilogue(&identity, should_setup);
        Ok(())
    }

    fn collect_answers(&self, identity: &ProjectIdentity) -> Result<(DbCredentials, bool)> {
        let defaults = DbCredentials::defaults(&identity.kebab);

        if self.yes {
            let should_setup = !self.no_setup;
            output::info("Using defaults:");
            output::plain(&format!("  Project:  {}", output::bold(&identity.kebab)));
            output::plain(&format!("  DB User:  {}", defaults.user));
            output::plain(&format!("  DB Pass:  {}", defaults.password));
            output::plain(&format!("  DB Name:  {}", defaults.name));
            output::plain(&format!(
                "  Setup:    {}",
                if should_setup { "yes" } else { "no" }
            ));
            return Ok((defaults, should_setup));
        }

        let user = prompt::ask_with_default("Database user?", &defaults.user)?;
        let password = prompt::ask_with_default("Database password?", &defaults.password)?;
        let name = prompt::ask_with_default("Database name?", &defaults.name)?;
        let should_setup = if self.no_setup {
            false
        } else {
            prompt::confirm("Run setup after scaffolding?")?
        };

        Ok((
            DbCredentials {
                user,
                password,
                name,
            },
            should_setup,
        ))
    }
}

fn print_epilogue(identity: &ProjectIdentity, did_setup: bool) {
    output::plain("");
    output::success(&output::bold("Project created successfully!"));
    output::plain("");
    output::plain(&format!("  {}", output::dim("Next steps:")));
    output::plain(&format!("  {} {}", output::cyan("cd"), identity.kebab));
    if !did_setup {
        output::plain(&format!("  {}", output::cyan("pnpm setup")));
    }
    output::plain(&format!("  {}", output::cyan("pnpm dev")));
    output::plain("");
    output::plain(&format!("  {}", output::dim("Default credentials:")));
    output::plain(&format!("  Email:    admin@{}.dev", identity.kebab));
    output::plain("  Password: Admin123!");
    output::plain("");
}
