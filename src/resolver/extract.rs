use regex::Regex;

/// Looks up the current `<major>.<minor>` token for `label` in the status
/// page body.
///
/// The page lists one table section per application: a `<th>` heading cell
/// whose text is the label, followed by rows whose first cell carries the
/// most recently published version. The search is label-exact (the heading
/// text must match the whole label, so "Foo" never hits a "FooBar"
/// section) and the label is escaped first so regex-special characters in
/// application names are matched literally.
///
/// Returns `Ok(None)` when the label has no section or its section has no
/// version cell before the next heading; that is an expected outcome, not
/// an error.
pub fn extract_version(page: &str, label: &str) -> Result<Option<String>, String> {
    let escaped = regex::escape(label);

    let heading = Regex::new(&format!(r"<th[^>]*>\s*{}\s*</th>", escaped))
        .map_err(|e| format!("Failed to compile heading pattern for '{}': {}", label, e))?;

    let section_start = match heading.find(page) {
        Some(m) => m.end(),
        None => return Ok(None),
    };

    // The section ends at the next heading cell of the same kind, or at
    // the end of the document.
    let rest = &page[section_start..];
    let boundary = Regex::new(r"<th[^>]*>")
        .map_err(|e| format!("Failed to compile section boundary pattern: {}", e))?;
    let section = match boundary.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    };

    let version_cell = Regex::new(r"<td[^>]*>\s*(\d+\.\d+)\b")
        .map_err(|e| format!("Failed to compile version cell pattern: {}", e))?;

    Ok(version_cell
        .captures(section)
        .map(|caps| caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(sections: &[(&str, &str)]) -> String {
        let mut body = String::from("<html><body><table>");
        for (label, version) in sections {
            body.push_str(&format!(
                "<tr><th colspan=\"3\">{}</th></tr><tr><td>{}</td><td>2026-08-12</td></tr>",
                label, version
            ));
        }
        body.push_str("</table></body></html>");
        body
    }

    #[test]
    fn finds_version_under_matching_label() {
        let body = page(&[("Acme Cruncher", "3.07")]);
        assert_eq!(
            extract_version(&body, "Acme Cruncher").unwrap(),
            Some("3.07".to_string())
        );
    }

    #[test]
    fn takes_first_version_cell_in_section() {
        let body = page(&[("Acme Cruncher", "3.07"), ("Acme Cruncher", "2.01")]);
        assert_eq!(
            extract_version(&body, "Acme Cruncher").unwrap(),
            Some("3.07".to_string())
        );
    }

    #[test]
    fn missing_label_is_not_an_error() {
        let body = page(&[("Acme Cruncher", "3.07")]);
        assert_eq!(extract_version(&body, "New App").unwrap(), None);
    }

    #[test]
    fn label_match_is_exact() {
        let body = page(&[("FooBar", "9.05")]);
        assert_eq!(extract_version(&body, "Foo").unwrap(), None);

        let both = page(&[("FooBar", "9.05"), ("Foo", "1.02")]);
        assert_eq!(
            extract_version(&both, "Foo").unwrap(),
            Some("1.02".to_string())
        );
    }

    #[test]
    fn regex_special_characters_in_label_are_literal() {
        let body = page(&[("Acme Cruncher (x64) 2.0", "5.11")]);
        assert_eq!(
            extract_version(&body, "Acme Cruncher (x64) 2.0").unwrap(),
            Some("5.11".to_string())
        );

        // An unescaped "." would let "2.0" match the "2X0" heading.
        let decoy = page(&[("Acme Cruncher (x64) 2X0", "8.42")]);
        assert_eq!(
            extract_version(&decoy, "Acme Cruncher (x64) 2.0").unwrap(),
            None
        );
    }

    #[test]
    fn search_stops_at_next_heading() {
        // Section for the searched label has no version cell; the version
        // belonging to the following section must not leak backwards.
        let body = "<table>\
            <tr><th>Empty App</th></tr>\
            <tr><td>no builds yet</td></tr>\
            <tr><th>Other App</th></tr>\
            <tr><td>7.33</td></tr>\
            </table>";
        assert_eq!(extract_version(body, "Empty App").unwrap(), None);
        assert_eq!(
            extract_version(body, "Other App").unwrap(),
            Some("7.33".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_in_cells_is_tolerated() {
        let body = "<table><tr><th class=\"app\"> Acme Cruncher </th></tr>\
            <tr><td>\n  3.07  </td></tr></table>";
        assert_eq!(
            extract_version(body, "Acme Cruncher").unwrap(),
            Some("3.07".to_string())
        );
    }
}
