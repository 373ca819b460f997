use crate::resolver::ResolveOptions;
use crate::utils::{signature::get_signature, version::get_version};
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io;

mod resolver;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "vernext")]
#[command(author = "Devaloop")]
#[command(about = "Resolves the next build version for a label from the published status page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the status page, look up LABEL and emit the next version
    Resolve {
        /// Application label to look up on the status page
        label: String,

        /// Status page URL (overrides VERNEXT_STATUS_URL and the built-in default)
        #[arg(long)]
        url: Option<String>,

        /// Read the status page from a local file instead of the network
        #[arg(long)]
        page_file: Option<PathBuf>,

        /// Artifact file the next version is written to
        #[arg(long, default_value = "next-version.txt")]
        artifact: PathBuf,

        /// Name of the pipeline output variable
        #[arg(long, default_value = "version")]
        output_name: String,

        /// Also print a JSON summary of the resolution
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Apply the increment rule to an explicit version string
    Bump {
        /// Current version as <major>.<minor>
        version: String,
    },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return Ok(());
    }

    let matches = cmd.get_matches();
    let cli: Cli = Cli::from_arg_matches(&matches).expect("failed to parse cli args");

    match cli.command {
        Commands::Resolve {
            label,
            url,
            page_file,
            artifact,
            output_name,
            json,
        } => {
            let opts = ResolveOptions {
                label,
                url,
                page_file,
                artifact,
                output_name,
                json,
            };

            if let Err(e) = resolver::run_resolve(&opts).await {
                return Err(io::Error::other(e));
            }

            Ok(())
        }

        Commands::Bump { version } => match resolver::bump::next_version(&version) {
            Ok(next) => {
                println!("{}", next);
                Ok(())
            }
            Err(e) => Err(io::Error::other(e)),
        },
    }
}
