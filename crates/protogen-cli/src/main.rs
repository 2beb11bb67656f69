use clap::{Parser, Subcommand};
use protogen_render::{persist, render};
use protogen_schema::{manifest::Manifest, node::ProtoSpec};
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process,
};

///
/// Cli
///

#[derive(Parser)]
#[command(
    name = "protogen",
    about = "Render validated proto3 schema manifests to canonical .proto text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a manifest to stdout.
    Render {
        /// Path to a JSON schema manifest.
        manifest: PathBuf,
    },

    /// Render a manifest and write it to a .proto file.
    Emit {
        /// Path to a JSON schema manifest.
        manifest: PathBuf,

        /// Output path for the rendered file.
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Render { manifest } => {
            let spec = load_spec(&manifest)?;
            print!("{}", render(&spec)?);
        }
        Command::Emit { manifest, output } => {
            let spec = load_spec(&manifest)?;
            persist(&spec, &output)?;
        }
    }

    Ok(())
}

fn load_spec(path: &Path) -> Result<ProtoSpec, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&text)?;

    Ok(manifest.into_spec()?)
}
