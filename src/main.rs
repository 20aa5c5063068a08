use clap::Parser;
use headtags::cli::{format_rejections, format_tag_list, Cli, Commands};
use headtags::error::HeadTagsError;
use headtags::infrastructure::{logging, Manifest};
use std::fs;
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), HeadTagsError> {
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Render {
            manifest,
            unsorted,
            merge,
        } => {
            let manifest = Manifest::load(&manifest)?;
            let sorted = manifest.options.sorted && !unsorted;
            let (mut registry, outcome) = manifest.into_registry();
            eprint!("{}", format_rejections(&outcome));

            if let Some(path) = merge {
                let snapshot = fs::read_to_string(&path)?;
                registry.try_import_snapshot(&snapshot)?;
            }

            registry.emit(&mut io::stdout().lock(), sorted)
        }
        Commands::Export { manifest } => {
            let (registry, outcome) = Manifest::load(&manifest)?.into_registry();
            eprint!("{}", format_rejections(&outcome));
            println!("{}", registry.export_snapshot()?);
            Ok(())
        }
        Commands::List { manifest, tag } => {
            let (registry, outcome) = Manifest::load(&manifest)?.into_registry();
            eprint!("{}", format_rejections(&outcome));

            let entries: Vec<_> = match tag {
                Some(name) => registry.by_tag_name(&name).collect(),
                None => registry.entries().collect(),
            };
            println!("{}", format_tag_list(&entries).trim_end());
            Ok(())
        }
    }
}
