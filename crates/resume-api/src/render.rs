//! HTML rendering of the editor and the print preview.

use std::fmt::Write;

use resume_models::ResumeDocument;

const EDITOR_TEMPLATE: &str = include_str!("../assets/editor.html");
const PREVIEW_STYLE: &str = include_str!("../assets/preview.css");

/// Placeholder in the editor template replaced by the document JSON.
const DATA_PLACEHOLDER: &str = "/*RESUME_DATA*/null";

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the editor page with `doc` embedded as its initial state.
pub fn render_editor(doc: &ResumeDocument) -> serde_json::Result<String> {
    // `</` inside a script block would end it early.
    let data = serde_json::to_string(doc)?.replace("</", "<\\/");
    Ok(EDITOR_TEMPLATE.replace(DATA_PLACEHOLDER, &data))
}

/// Renders the print-ready preview of `doc`.
pub fn render_preview(doc: &ResumeDocument) -> String {
    let p = &doc.profile;
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n<style>\n{PREVIEW_STYLE}</style>\n</head>\n<body>\n\
         <div class=\"controls\">\
         <button class=\"btn\" onclick=\"window.print()\">Download PDF</button>\
         <button class=\"btn btn-secondary\" onclick=\"window.close()\">Close</button>\
         </div>\n<main class=\"page\">\n",
        title = if p.name.is_empty() {
            "Resume".to_string()
        } else {
            format!("{} - Resume", escape_html(&p.name))
        },
    );

    let _ = write!(
        html,
        "<header>\n<h1>{}</h1>\n<div class=\"headline\">{}</div>\n<div class=\"contact\">",
        escape_html(&p.name),
        escape_html(&p.title),
    );
    if !p.email.is_empty() {
        let email = escape_html(&p.email);
        let _ = write!(html, "<span><a href=\"mailto:{email}\">{email}</a></span>");
    }
    if !p.phone.is_empty() {
        let _ = write!(html, "<span>{}</span>", escape_html(&p.phone));
    }
    if !p.linkedin.is_empty() {
        let _ = write!(
            html,
            "<span><a href=\"{}\" target=\"_blank\">LinkedIn</a></span>",
            escape_html(&profile_url(&p.linkedin)),
        );
    }
    if !p.location.is_empty() {
        let _ = write!(html, "<span>{}</span>", escape_html(&p.location));
    }
    html.push_str("</div>\n</header>\n");

    if !p.summary.is_empty() {
        let _ = write!(
            html,
            "<section>\n<h2>Professional Summary</h2>\n<p class=\"summary\">{}</p>\n</section>\n",
            escape_html(&p.summary),
        );
    }

    if !doc.skills.is_empty() {
        html.push_str("<section>\n<h2>Core Competencies</h2>\n<div class=\"skills\">\n");
        for skill in &doc.skills {
            let _ = writeln!(
                html,
                "<div class=\"skill\"><strong>{}</strong><span>{}</span></div>",
                escape_html(&skill.category),
                escape_html(&skill.items),
            );
        }
        html.push_str("</div>\n</section>\n");
    }

    if !doc.experience.is_empty() {
        html.push_str("<section>\n<h2>Professional Experience</h2>\n");
        for exp in &doc.experience {
            let meta: Vec<String> = [&exp.company, &exp.period]
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(|s| escape_html(s))
                .collect();
            let _ = write!(
                html,
                "<div class=\"entry\">\n<h3>{}</h3>\n<div class=\"meta\">{}</div>\n",
                escape_html(&exp.title),
                meta.join(" | "),
            );
            push_list(&mut html, &exp.responsibilities);
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !doc.achievements.is_empty() {
        html.push_str("<section>\n<h2>Key Achievements</h2>\n");
        for ach in &doc.achievements {
            let _ = writeln!(html, "<div class=\"entry\">\n<h3>{}</h3>", escape_html(&ach.title));
            push_list(&mut html, &ach.points);
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_list(html: &mut String, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    html.push_str("<ul>\n");
    for line in lines {
        let _ = writeln!(html, "<li>{}</li>", escape_html(line));
    }
    html.push_str("</ul>\n");
}

/// Stored LinkedIn values are usually bare (`linkedin.com/in/...`).
fn profile_url(linkedin: &str) -> String {
    if linkedin.starts_with("http://") || linkedin.starts_with("https://") {
        linkedin.to_string()
    } else {
        format!("https://{linkedin}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_models::{Achievement, Experience, SkillGroup};

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.profile.name = "Ann <Admin>".to_string();
        doc.profile.title = "Engineer".to_string();
        doc.profile.email = "ann@example.com".to_string();
        doc.profile.linkedin = "linkedin.com/in/ann".to_string();
        doc.profile.summary = "Ships \"reliable\" systems & tools.".to_string();
        doc.skills.push(SkillGroup::new("Languages", "Rust, Go"));
        doc.experience.push(
            Experience::new("Lead", "Acme", "2020 - 2024")
                .with_responsibility("Ran the team")
                .with_responsibility("Shipped v2"),
        );
        doc.achievements
            .push(Achievement::new("Speaker").with_point("RustConf 2025"));
        doc
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_preview_escapes_content() {
        let html = render_preview(&sample());

        assert!(html.contains("<h1>Ann &lt;Admin&gt;</h1>"));
        assert!(html.contains("Ships &quot;reliable&quot; systems &amp; tools."));
        assert!(!html.contains("<Admin>"));
    }

    #[test]
    fn test_preview_preserves_order() {
        let html = render_preview(&sample());

        let first = html.find("Ran the team").unwrap();
        let second = html.find("Shipped v2").unwrap();
        assert!(first < second);
        assert!(html.find("Core Competencies").unwrap() < html.find("Professional Experience").unwrap());
        assert!(html.contains("<div class=\"meta\">Acme | 2020 - 2024</div>"));
    }

    #[test]
    fn test_preview_links() {
        let html = render_preview(&sample());

        assert!(html.contains("href=\"mailto:ann@example.com\""));
        assert!(html.contains("href=\"https://linkedin.com/in/ann\""));
    }

    #[test]
    fn test_preview_empty_document() {
        let html = render_preview(&ResumeDocument::default());

        assert!(html.contains("<title>Resume</title>"));
        assert!(!html.contains("Core Competencies"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_editor_embeds_document() {
        let mut doc = sample();
        doc.profile.summary = "</script><script>alert(1)</script>".to_string();
        let html = render_editor(&doc).unwrap();

        assert!(!html.contains(DATA_PLACEHOLDER));
        assert!(html.contains("\"name\":\"Ann <Admin>\""));
        assert!(!html.contains("</script><script>alert(1)"));
    }
}
