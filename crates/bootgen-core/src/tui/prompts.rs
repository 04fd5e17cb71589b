//! Charm-style CLI prompts using cliclack

use crate::catalog::{manifest::CatalogManifest, store::TemplateStore, version};
use crate::error::ScaffoldError;
use crate::render::renderer;
use crate::runtime::host;
use crate::spring::{config::ScaffoldConfig, plan, questions};
use crate::survey::{collector, AcceptDefaults, AnswerSource, Choice, Question};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default catalog location.
pub const TEMPLATE_DIR_ENV: &str = "BOOTGEN_TEMPLATE_DIR";

/// Upgrade command shown in version warnings.
const UPGRADE_COMMAND: &str = "cargo install bootgen-cli --force";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use as the template catalog
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Accept every default without prompting (non-interactive mode)
    pub yes: bool,
}

/// Run the scaffold with interactive prompts.
pub fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("bootgen")?;

    // Step 1: Load the template catalog
    let catalog_dir = resolve_catalog_dir(&args);
    cliclack::log::info(format!("Using templates from {}", catalog_dir.display()))?;
    let manifest = CatalogManifest::load(&catalog_dir)?;
    let store = TemplateStore::from_dir(&catalog_dir)?;

    // Check version compatibility
    if let Some(warning) = version::compatibility_warning(cli_version, &manifest.version) {
        cliclack::log::warning(format!("{warning}; upgrade with `{UPGRADE_COMMAND}`"))?;
    }
    for id in manifest.missing_from(&store) {
        cliclack::log::warning(format!("Catalog lists '{}' but the file is missing", id))?;
    }

    // Step 2: Select destination directory
    let project_dir = select_directory(&args)?;

    // Step 3: Collect answers
    let questionnaire =
        questions::questionnaire(&host::project_name(&project_dir), &host::git_identity());
    questionnaire.validate()?;
    let answers = if args.yes {
        cliclack::log::info("Accepting all defaults (--yes mode)")?;
        collector::collect(&questionnaire, &mut AcceptDefaults)?
    } else {
        collector::collect(&questionnaire, &mut Terminal)?
    };

    // Step 4: Derive configuration and compute the render plan
    let config = ScaffoldConfig::derive(&answers);
    let actions = plan::plan(&config);

    // Step 5: Render
    let spinner = cliclack::spinner();
    spinner.start("Scaffolding project...");
    match renderer::render(&actions, &store, &config, &project_dir) {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
        }
        Err(e) => {
            spinner.stop("Scaffolding failed");
            return Err(e.into());
        }
    }

    // Step 6: Show next steps
    print_next_steps(&project_dir)?;

    Ok(())
}

/// Interactive answer source backed by cliclack prompts.
struct Terminal;

impl AnswerSource for Terminal {
    fn input(&mut self, question: &Question, default: &str) -> Result<String, ScaffoldError> {
        let mut input = cliclack::input(question.prompt).required(false);
        if !default.is_empty() {
            input = input.default_input(default);
        }
        Ok(input.interact()?)
    }

    fn select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<String, ScaffoldError> {
        let mut select = cliclack::select(question.prompt);
        for choice in choices {
            select = select.item(choice.value.to_string(), choice.label, "");
        }
        if let Some(default) = default {
            select = select.initial_value(default.to_string());
        }
        Ok(select.interact()?)
    }

    fn multi_select(
        &mut self,
        question: &Question,
        choices: &[Choice],
        preselected: &[&str],
    ) -> Result<Vec<String>, ScaffoldError> {
        let mut multi = cliclack::multiselect(question.prompt).required(false);
        for choice in choices {
            multi = multi.item(choice.value.to_string(), choice.label, "");
        }
        multi = multi.initial_values(preselected.iter().map(|v| v.to_string()).collect());
        Ok(multi.interact()?)
    }

    fn confirm(&mut self, question: &Question, default: bool) -> Result<bool, ScaffoldError> {
        Ok(cliclack::confirm(question.prompt)
            .initial_value(default)
            .interact()?)
    }
}

fn resolve_catalog_dir(args: &CreateArgs) -> PathBuf {
    match &args.template_dir {
        Some(dir) => dir.clone(),
        None => std::env::var(TEMPLATE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("templates")),
    }
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let resolve = |p: PathBuf| {
        if p.is_absolute() {
            p
        } else {
            current_dir.join(p)
        }
    };

    let path = if let Some(dir) = &args.directory {
        let path = resolve(dir.clone());
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
        path
    } else if args.yes {
        current_dir.clone()
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;
        match input.as_str() {
            "" | "." => current_dir.clone(),
            other => resolve(PathBuf::from(other)),
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Scaffolding into a non-empty directory needs an explicit go-ahead.
    let existing = std::fs::read_dir(&path)
        .map(|entries| entries.count())
        .unwrap_or(0);
    if existing > 0 {
        cliclack::log::warning(format!("Directory has {existing} existing items"))?;
        let proceed = args.yes
            || cliclack::confirm("Continue anyway?")
                .initial_value(true)
                .interact()?;
        if !proceed {
            anyhow::bail!("Setup cancelled.");
        }
    }

    Ok(path)
}

fn print_next_steps(project_dir: &Path) -> Result<()> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    steps.push("./gradlew bootRun".to_string());

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
