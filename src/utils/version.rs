/// Returns the CLI version with a runtime-first strategy:
/// 1. VERNEXT_CLI_VERSION env var
/// 2. compile-time env!("CARGO_PKG_VERSION") as a last resort
pub fn get_version() -> String {
    if let Ok(v) = std::env::var("VERNEXT_CLI_VERSION") {
        if !v.trim().is_empty() {
            return v;
        }
    }

    let compile_time = option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0");
    compile_time.to_string()
}
