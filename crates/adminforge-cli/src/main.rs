//! Adminforge CLI tool.

use std::collections::HashSet;
use std::path::PathBuf;

use adminforge_codegen::react;
use adminforge_schema::Entity;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adminforge")]
#[command(author, version, about = "Generates React/Next.js admin modules from entity definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an admin module from an entity definition
    Generate {
        /// Input entity definition (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Validate an entity definition without generating code
    Check {
        /// Input entity definition (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show index strategies for a SQL data type, or list all known types
    Indexes {
        /// SQL data type, e.g. varchar or "double precision"
        data_type: Option<String>,
    },

    /// Show the npm packages an entity definition resolves to
    Packages {
        /// Input entity definition (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { input, output } => run_generate(&input, &output),
        Commands::Check { input } => run_check(&input),
        Commands::Indexes { data_type } => run_indexes(data_type.as_deref()),
        Commands::Packages { input } => run_packages(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_entity(input: &PathBuf) -> Result<Entity, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(input)?;
    let entity: Entity = serde_json::from_str(&source)
        .map_err(|e| format!("failed to parse {}: {}", input.display(), e))?;
    Ok(entity)
}

fn run_generate(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let entity = load_entity(input)?;

    let files = react::admin_module().run(&entity)?;

    std::fs::create_dir_all(output)?;

    for file in &files.files {
        let path = output.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.content)?;
    }

    println!(
        "Generated {} files for {} to {}",
        files.len(),
        entity.type_name(),
        output.display()
    );
    for file in &files.files {
        println!("  - {}", file.path.display());
    }

    Ok(())
}

fn run_check(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let entity = load_entity(input)?;

    println!("✓ {} is valid", input.display());
    println!("  entity {} ({} fields)", entity.type_name(), entity.fields.len());

    for field in &entity.fields {
        let hint = match &field.input_type {
            Some(input_type) => format!("{} as {}", field.data_type, input_type),
            None => field.data_type.clone(),
        };
        println!("    {} ({})", field.key(), hint);
    }

    // Colliding keys are legal but almost always a mistake worth surfacing.
    let mut seen = HashSet::new();
    for field in &entity.fields {
        if !seen.insert(field.key()) {
            println!(
                "  warning: field \"{}\" maps to key \"{}\", which an earlier field already uses",
                field.name,
                field.key()
            );
        }
    }

    let routes = &entity.routes;
    let mut enabled = vec![];
    for (flag, name) in [
        (routes.list, "list"),
        (routes.create, "create"),
        (routes.edit, "edit"),
        (routes.view, "view"),
    ] {
        if flag {
            enabled.push(name);
        }
    }
    println!("  routes: {}", if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    });

    Ok(())
}

fn run_indexes(data_type: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match data_type {
        Some(raw) => {
            let key = raw.trim().to_lowercase();
            match adminforge_indexes::lookup(&key) {
                Some(profile) if profile.not_indexable => {
                    println!("{}: not indexable", profile.data_type);
                }
                Some(profile) => {
                    println!("{}:", profile.data_type);
                    for option in &profile.options {
                        let mut notes = vec![];
                        if option.is_recommended {
                            notes.push("recommended");
                        }
                        if option.kind == profile.default_option {
                            notes.push("default");
                        }
                        let suffix = if notes.is_empty() {
                            String::new()
                        } else {
                            format!(" ({})", notes.join(", "))
                        };
                        println!("  {}{} - {}", option.kind, suffix, option.rationale);
                    }
                }
                None => {
                    println!("{}: no index profile known", key);
                }
            }
        }
        None => {
            println!("Known data types:");
            println!();
            for profile in adminforge_indexes::profiles() {
                if profile.not_indexable {
                    println!("  {:18} not indexable", profile.data_type);
                } else {
                    let kinds: Vec<&str> = profile.options.iter().map(|o| o.kind).collect();
                    println!(
                        "  {:18} {} (default {})",
                        profile.data_type,
                        kinds.join(", "),
                        profile.default_option
                    );
                }
            }
        }
    }

    Ok(())
}

fn run_packages(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let entity = load_entity(input)?;
    let resolution = adminforge_packages::resolve(&entity.fields, &entity.routes);

    println!("Packages for {}:", entity.type_name());
    for package in &resolution.packages {
        println!("  {} {}", package.name, package.version_range);
    }

    println!();
    println!("Dev packages:");
    for package in &resolution.dev_packages {
        println!("  {} {}", package.name, package.version_range);
    }

    Ok(())
}
