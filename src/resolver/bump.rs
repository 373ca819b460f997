/// Starting point for labels that have never been published.
pub const DEFAULT_VERSION: &str = "1.0";

/// Computes the next build version from a `<major>.<minor>` string.
///
/// The minor part carries into major at 99: `3.99` becomes `4.00`.
/// Otherwise only the minor part is incremented. The minor part is always
/// rendered with at least two digits so artifact names sort correctly
/// (`1.0` resolves to `1.01`, `3.07` to `3.08`).
pub fn next_version(current: &str) -> Result<String, String> {
    let (major_raw, minor_raw) = current.split_once('.').ok_or_else(|| {
        format!(
            "Malformed version '{}': expected <major>.<minor>",
            current
        )
    })?;

    let major = major_raw
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("Malformed major part '{}' in '{}'", major_raw, current))?;
    let minor = minor_raw
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("Malformed minor part '{}' in '{}'", minor_raw, current))?;

    if minor == 99 {
        Ok(format!("{}.00", major + 1))
    } else {
        Ok(format!("{}.{:02}", major, minor + 1))
    }
}

/// Resolves the current version for a label: the extracted token when the
/// status page had one, the default otherwise. Absence is not an error so
/// a brand-new label gets a sane starting version.
pub fn current_or_default(found: Option<String>) -> String {
    found.unwrap_or_else(|| DEFAULT_VERSION.to_string())
}
