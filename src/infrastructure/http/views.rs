//! HTML Views
//!
//! 章节首页、章节页与错误页的 HTML 渲染。
//! 章节内容按原始文本放入 `<pre>`，不做 markdown 渲染。

use std::fmt::Write;

use axum::http::StatusCode;

use crate::application::ChapterPage;

use super::dto::ChapterLink;

const SITE_TITLE: &str = "Chapters";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem;}\
pre{white-space:pre-wrap;word-wrap:break-word;}\
nav a{margin-right:1rem;}";

/// 渲染章节首页
pub fn render_index_page(links: &[ChapterLink]) -> String {
    let mut html = String::with_capacity(1024);
    open_document(&mut html, SITE_TITLE);

    let _ = writeln!(html, "<h1>{}</h1>", escape(SITE_TITLE));
    if links.is_empty() {
        html.push_str("<p>No chapters yet.</p>\n");
    } else {
        html.push_str("<ol class=\"chapters\">\n");
        for link in links {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\">{}</a></li>",
                escape(&link.href),
                escape(&link.title)
            );
        }
        html.push_str("</ol>\n");
    }

    close_document(&mut html);
    html
}

/// 渲染章节页
pub fn render_chapter_page(page: &ChapterPage) -> String {
    let mut html = String::with_capacity(page.contents.len() + 512);
    open_document(&mut html, &page.title);

    html.push_str("<nav><a href=\"/\">&larr; All chapters</a></nav>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&page.title));
    let _ = writeln!(
        html,
        "<pre class=\"chapter\">{}</pre>",
        escape(&page.contents)
    );

    close_document(&mut html);
    html
}

/// 渲染错误页
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );

    let mut html = String::with_capacity(512);
    open_document(&mut html, &heading);
    let _ = writeln!(html, "<h1>{}</h1>", escape(&heading));
    let _ = writeln!(html, "<p>{}</p>", escape(message));
    html.push_str("<nav><a href=\"/\">&larr; All chapters</a></nav>\n");
    close_document(&mut html);
    html
}

fn open_document(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");
}

fn close_document(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn link(name: &str, title: &str) -> ChapterLink {
        ChapterLink {
            href: format!("/chapter/{}", name),
            title: title.to_string(),
        }
    }

    #[test]
    fn index_lists_links_in_order() {
        let html = render_index_page(&[link("intro", "Intro"), link("setup", "Setup")]);

        let intro = html.find("<a href=\"/chapter/intro\">Intro</a>").unwrap();
        let setup = html.find("<a href=\"/chapter/setup\">Setup</a>").unwrap();
        assert!(intro < setup);
    }

    #[test]
    fn index_without_chapters() {
        let html = render_index_page(&[]);
        assert!(html.contains("No chapters yet."));
        assert!(!html.contains("<ol"));
    }

    #[test]
    fn chapter_page_keeps_raw_markdown() {
        let page = ChapterPage {
            name: "intro".to_string(),
            title: "Intro".to_string(),
            path: PathBuf::from("db/files/01_intro.md"),
            contents: "# Intro\n\n**bold** <b>tag</b>".to_string(),
        };

        let html = render_chapter_page(&page);
        assert!(html.contains("<title>Intro</title>"));
        assert!(html.contains("# Intro\n\n**bold** &lt;b&gt;tag&lt;/b&gt;"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn error_page_shows_status() {
        let html = render_error_page(StatusCode::NOT_FOUND, "Chapter not found: x");
        assert!(html.contains("<h1>404 Not Found</h1>"));
        assert!(html.contains("Chapter not found: x"));
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a&b"), "a&amp;b");
        assert_eq!(escape("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape("it's"), "it&#x27;s");
    }
}
