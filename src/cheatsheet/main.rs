use cheatsheet::config::CsConfig;
use cheatsheet::error::Result;
use cheatsheet::model::CheatSheet;
use cheatsheet::paths::PathResolver;
use cheatsheet::store::{ListStorage, APP_NAME, SUITE_NAME};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    cheatsheet::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    storage: ListStorage,
    config: CsConfig,
    config_dir: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::Lists) => handle_lists(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Import { file }) => handle_import(&ctx, &file),
        Some(Commands::Restore) => handle_restore(&ctx),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let resolver = PathResolver::system();
    let config_dir = resolver.user_app_config_dir(APP_NAME, Some(SUITE_NAME))?;
    let config = CsConfig::load(&config_dir)?;

    let name = cli
        .list
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&config.default_list);
    let storage = ListStorage::new(Some(name));

    Ok(AppContext {
        storage,
        config,
        config_dir,
    })
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let list: CheatSheet = match ctx.storage.load_list() {
        Ok(list) => list,
        Err(e) if e.is_missing_list() => {
            println!("List '{}' is empty.", ctx.storage.list_name());
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    print_sheet(ctx.storage.list_name(), &list);
    Ok(())
}

fn handle_lists(ctx: &AppContext) -> Result<()> {
    let mut names = ListStorage::list_all_names_in_env()?;
    names.sort();
    if names.is_empty() {
        println!("No lists found.");
        return Ok(());
    }
    for name in names {
        if name == ctx.storage.list_name() {
            println!("{} {}", "*".green(), name.bold());
        } else {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.storage.list_file_path()?.display());
    println!("{}", ctx.storage.backup_file_path()?.display());
    Ok(())
}

fn handle_import(ctx: &AppContext, file: &Path) -> Result<()> {
    let list: CheatSheet = cheatsheet::store::fs::read_document(file)?;
    ctx.storage.save_list(&list)?;
    println!(
        "Imported {} entries into '{}'.",
        list.len(),
        ctx.storage.list_name()
    );
    Ok(())
}

fn handle_restore(ctx: &AppContext) -> Result<()> {
    let previous: CheatSheet = ctx.storage.load_backup()?;
    // Saving moves the current file into the backup slot, so restore can be undone.
    ctx.storage.save_list(&previous)?;
    println!(
        "Restored '{}' from backup ({} entries).",
        ctx.storage.list_name(),
        previous.len()
    );
    Ok(())
}

fn handle_config(mut ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("default-list"), None) => {
            println!("default-list = {}", ctx.config.default_list);
        }
        (Some("default-list"), Some(v)) => {
            ctx.config.set_default_list(&v);
            ctx.config.save(&ctx.config_dir)?;
            println!("default-list = {}", ctx.config.default_list);
        }
        (Some(other), _) => {
            eprintln!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_sheet(name: &str, list: &CheatSheet) {
    if list.is_empty() {
        println!("List '{}' is empty.", name);
        return;
    }
    for primary in list.primaries() {
        println!("{}", primary.bold().underline());
        for entry in list.entries.iter().filter(|e| e.primary == primary) {
            let tags = if entry.tags.is_empty() {
                String::new()
            } else {
                let joined: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
                format!(" [{}]", joined.join(", ")).dimmed().to_string()
            };
            println!(
                "  {:>3}  {}  {}{}",
                entry.oid.to_string().dimmed(),
                entry.clue,
                entry.answer.cyan(),
                tags
            );
        }
    }
}
