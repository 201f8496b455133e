//! Ground-truth label formatting.

/// Renders one chapter's ground truth as a JSON object fragment.
///
/// Key order is fixed, `chapter_number` is a quoted string, pages are bare
/// integers, and every fragment carries a trailing comma and newline. The
/// orchestrator strips the final fragment's comma and wraps the list in a
/// fenced `json` block. The title goes through JSON string escaping so the
/// finished label always decodes cleanly.
pub fn format_label(
    chapter_number: u32,
    chapter_title: &str,
    start_page: u32,
    end_page: u32,
) -> String {
    let title = serde_json::Value::String(chapter_title.to_owned());
    format!(
        "{{\"chapter_number\": \"{chapter_number}\", \"chapter_title\": {title}, \
         \"start_page\": {start_page}, \"end_page\": {end_page}}},\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_exact_fragment_shape() {
        assert_eq!(
            format_label(2, "Trade Routes", 12, 31),
            "{\"chapter_number\": \"2\", \"chapter_title\": \"Trade Routes\", \
             \"start_page\": 12, \"end_page\": 31},\n"
        );
    }

    #[test]
    fn escapes_quotes_in_titles() {
        let fragment = format_label(1, "The \"Great\" War", 1, 20);
        let object: serde_json::Value =
            serde_json::from_str(fragment.trim_end().trim_end_matches(',')).unwrap();
        assert_eq!(object["chapter_title"], "The \"Great\" War");
        assert_eq!(object["chapter_number"], "1");
        assert_eq!(object["start_page"], 1);
    }
}
