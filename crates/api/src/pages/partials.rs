/// Presentational snippets shared by the server-rendered pages

/// Ordered labels joined by a separator, without a trailing separator
pub fn breadcrumb(labels: &[&str]) -> String {
    let crumbs = labels
        .iter()
        .map(|label| format!("<span>{}</span>", escape_html(label)))
        .collect::<Vec<_>>()
        .join(" / ");

    format!(r#"<nav class="breadcrumb">{}</nav>"#, crumbs)
}

pub fn back_link(href: &str, label: &str) -> String {
    format!(
        r#"<a class="back-link" href="{}">{}</a>"#,
        escape_html(href),
        escape_html(label)
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
