use crate::types::resolution::Resolution;
use crate::utils::logger::{LogLevel, Logger};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes the single-line artifact consumed by later pipeline stages.
pub fn write_artifact(path: &Path, version: &str) -> Result<(), String> {
    std::fs::write(path, format!("{}\n", version))
        .map_err(|e| format!("Failed to write artifact '{}': {}", path.display(), e))
}

/// Appends `<name>=<version>` to the pipeline output file when the host
/// pipeline provides one (the `GITHUB_OUTPUT` protocol). A run outside a
/// pipeline simply skips this channel.
pub fn publish_pipeline_output(name: &str, version: &str) -> Result<(), String> {
    let Some(output_path) = std::env::var_os("GITHUB_OUTPUT") else {
        return Ok(());
    };

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&output_path)
        .map_err(|e| {
            format!(
                "Failed to write pipeline output '{}': {}",
                Path::new(&output_path).display(),
                e
            )
        })?;

    writeln!(file, "{}={}", name, version).map_err(|e| {
        format!(
            "Failed to write pipeline output '{}': {}",
            Path::new(&output_path).display(),
            e
        )
    })
}

/// Publishes a resolution on every output channel: artifact file,
/// pipeline output variable, and stdout. Both file channels are fatal on
/// failure; the bare version string is printed last so a shell caller can
/// capture it directly.
pub fn emit(
    resolution: &Resolution,
    artifact: &Path,
    output_name: &str,
    json: bool,
) -> Result<(), String> {
    write_artifact(artifact, &resolution.next)?;
    publish_pipeline_output(output_name, &resolution.next)?;

    Logger::new().log_message(
        LogLevel::Success,
        &format!(
            "Next version for '{}' is {} (artifact: {})",
            resolution.label,
            resolution.next,
            artifact.display()
        ),
    );

    if json {
        let summary = serde_json::to_string(resolution)
            .map_err(|e| format!("Failed to serialize resolution summary: {}", e))?;
        println!("{}", summary);
    }

    println!("{}", resolution.next);

    Ok(())
}
