use crate::types::resolution::Resolution;
use crate::utils::endpoint::get_status_page_url;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::spinner::Spinner;
use std::path::PathBuf;

pub mod bump;
pub mod emit;
pub mod extract;
pub mod fetch;

pub struct ResolveOptions {
    pub label: String,
    pub url: Option<String>,
    pub page_file: Option<PathBuf>,
    pub artifact: PathBuf,
    pub output_name: String,
    pub json: bool,
}

/// Runs the whole pipeline for one label: fetch, extract, resolve, emit.
/// The first failing step aborts the run.
pub async fn run_resolve(opts: &ResolveOptions) -> Result<(), String> {
    let logger = Logger::new();

    let page = match &opts.page_file {
        Some(path) => {
            logger.log_message(
                LogLevel::Info,
                &format!("Reading status page from '{}'", path.display()),
            );
            fetch::read_page_file(path)?
        }
        None => {
            let url = opts
                .url
                .clone()
                .unwrap_or_else(get_status_page_url);
            let spinner = Spinner::new(format!("Fetching status page from '{}'", url));
            match fetch::fetch_status_page(&url).await {
                Ok(body) => {
                    spinner.succeed(format!("Fetched status page ({} bytes)", body.len()));
                    body
                }
                Err(e) => {
                    spinner.fail(e.clone());
                    return Err(e);
                }
            }
        }
    };

    let found = extract::extract_version(&page, &opts.label)?;
    match &found {
        Some(v) => {
            logger.log_message(
                LogLevel::Info,
                &format!("Current version for '{}' is {}", opts.label, v),
            );
        }
        None => {
            logger.log_message(
                LogLevel::Warning,
                &format!(
                    "No published version for '{}', starting from {}",
                    opts.label,
                    bump::DEFAULT_VERSION
                ),
            );
        }
    }

    let current = bump::current_or_default(found);
    let next = bump::next_version(&current)?;

    let resolution = Resolution {
        label: opts.label.clone(),
        current,
        next,
    };

    emit::emit(&resolution, &opts.artifact, &opts.output_name, opts.json)
}
