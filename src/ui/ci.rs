/// Render a GitHub Actions `::error` workflow command.
pub fn github_error_annotation(message: &str, file: Option<&str>) -> String {
    let props = match file {
        Some(file) => format!(" file={},title=embedgen", escape_property(file)),
        None => " title=embedgen".to_string(),
    };
    format!("::error{}::{}", props, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_without_file() {
        assert_eq!(
            github_error_annotation("no files matching *.cbor*", None),
            "::error title=embedgen::no files matching *.cbor*"
        );
    }

    #[test]
    fn annotation_escapes_newlines_and_percent() {
        let rendered = github_error_annotation("100%\nbroken", Some("assets/a.cbor"));
        assert_eq!(
            rendered,
            "::error file=assets/a.cbor,title=embedgen::100%25%0Abroken"
        );
    }

    #[test]
    fn annotation_escapes_property_separators() {
        let rendered = github_error_annotation("x", Some("C:\\a,b"));
        assert!(rendered.starts_with("::error file=C%3A\\a%2Cb,title=embedgen::"));
    }
}
