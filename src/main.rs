use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xresourcedb::adapters::database_from_file;
use xresourcedb::resource_get_string;

#[derive(Parser)]
#[command(name = "rdb")]
#[command(author, version, about = "Query and inspect X-style resource databases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a name (and optional class) against a database file
    Query {
        #[arg(long = "db")]
        db: PathBuf,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        class: String,
    },

    /// Parse a database file and re-render it in canonical form
    Dump {
        #[arg(long = "db")]
        db: PathBuf,
    },

    /// Combine two database files and print the result
    Merge {
        #[arg(long)]
        into: PathBuf,

        #[arg(long)]
        from: PathBuf,

        /// New entries replace existing ones on conflict
        #[arg(long)]
        r#override: bool,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { db, name, class } => {
            let database = database_from_file(&db).with_context(|| format!("loading {}", db.display()))?;
            match resource_get_string(&database, &name, &class) {
                Ok(value) => {
                    println!("{}", String::from_utf8_lossy(value));
                }
                Err(_) => {
                    eprintln!("not found");
                    std::process::exit(1);
                }
            }
        }
        Commands::Dump { db } => {
            let database = database_from_file(&db).with_context(|| format!("loading {}", db.display()))?;
            io::stdout().write_all(&database.to_text())?;
        }
        Commands::Merge { into, from, r#override, verbose } => {
            let mut target = database_from_file(&into).with_context(|| format!("loading {}", into.display()))?;
            if verbose {
                println!("Loaded {} entries from {}", target.len(), into.display());
            }

            let mut source = database_from_file(&from).with_context(|| format!("loading {}", from.display()))?;
            if verbose {
                println!("Loaded {} entries from {}", source.len(), from.display());
            }

            source.combine_into(&mut target, r#override);

            if verbose {
                println!("Combined into {} entries", target.len());
            }
            io::stdout().write_all(&target.to_text())?;
        }
    }

    Ok(())
}
