// src/views/layout.rs

/// Shared HTML shell for every server-rendered page.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
{body}
</body>
</html>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wraps_body_and_title() {
        let html = page("QCaaS", "<main>hello</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>QCaaS</title>"));
        assert!(html.contains("<main>hello</main>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/style.css">"#));
    }
}
