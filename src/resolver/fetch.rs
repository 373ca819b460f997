use std::path::Path;

/// Retrieves the status page body over HTTPS.
///
/// Any network failure or non-success status is fatal to the run; the
/// surrounding pipeline is expected to stop, so there is no retry here.
pub async fn fetch_status_page(url: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            return Err(format!("Retrieval failed for '{}': {}", url, e));
        }
    };

    if !response.status().is_success() {
        return Err(format!(
            "Retrieval failed for '{}': server answered {}",
            url,
            response.status()
        ));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Retrieval failed for '{}': could not read body: {}", url, e))
}

/// Reads a local snapshot of the status page, for offline runs and
/// pipeline debugging.
pub fn read_page_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Retrieval failed for '{}': {}", path.display(), e))
}
