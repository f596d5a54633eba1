use crate::models::TemplateValues;

/// Seconds before the acknowledgment tab closes itself.
pub const AUTO_CLOSE_SECS: u32 = 5;

/// Standalone page shown after a recipient taps a reminder button.
///
/// `title` and `message` come from HubDB and are embedded as-is; the message
/// is an HTML fragment authored in the CMS.
pub fn render_ack_page(values: &TemplateValues) -> String {
    let title = values.title.as_deref().unwrap_or_default();
    let message = values.message.as_deref().unwrap_or_default();
    let close_ms = AUTO_CLOSE_SECS * 1000;

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial; padding: 24px; max-width: 900px; margin: auto; }}
  </style>
  <script>
    setTimeout(() => window.close(), {close_ms});
  </script>
</head>
<body>
  {message}
</body>
</html>"#
    )
}
