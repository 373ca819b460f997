pub fn get_signature(version: &str) -> String {
    let signature = format!(
        r#"
   .-~~~-.
  / .-.-. \        🧭  Vernext (next-build-version resolver for CI pipelines)
 |  |N|  | |
 |  '-'-' |        Looks up the latest published build version for a label
  \       /        and computes the next one.
   '-._.-'
    |   |          https://devalang.com
    '---'          v{}
"#,
        version
    );

    signature
}
