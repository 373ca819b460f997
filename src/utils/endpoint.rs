/// The build status page published by the release pipeline.
pub const DEFAULT_STATUS_PAGE_URL: &str = "https://builds.devalang.com/status";

pub fn get_status_page_url() -> String {
    std::env::var("VERNEXT_STATUS_URL").unwrap_or_else(|_| DEFAULT_STATUS_PAGE_URL.to_string())
}
