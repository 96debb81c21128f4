//! HTML rendering.
//!
//! Every page is a full document built from a shared shell. Service pages
//! compose two blocks: the layout (hero with icon, title and subtitle) and
//! the content (the bullet list of offered services).

use url::Url;

use crate::content::catalog::{ServicePage, SERVICE_PAGES};
use crate::content::privacy::{PageMetadata, PRIVACY_METADATA, PRIVACY_PATH, PRIVACY_SECTIONS};
use crate::fallback::FallbackView;

/// Site-wide values needed by every document.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site_name: &'a str,
    pub base_url: Option<&'a Url>,
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
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

struct Head<'a> {
    title: &'a str,
    description: &'a str,
    keywords: &'a [&'a str],
    /// Site-relative path of a known page. Documents built from request
    /// input (404, legacy) leave this unset.
    canonical: Option<&'a str>,
    indexable: bool,
}

/// Absolute URL of a page beneath the configured base, keeping any path
/// the base already has.
fn canonical_url(base: &Url, path: &str) -> Option<Url> {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let with_slash = format!("{}/", root.path());
        root.set_path(&with_slash);
    }
    root.join(path.trim_start_matches('/')).ok()
}

fn document(ctx: RenderContext<'_>, head: Head<'_>, body: &str) -> String {
    let mut meta = format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(head.description)
    );
    if !head.keywords.is_empty() {
        meta.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape(&head.keywords.join(", "))
        ));
    }
    if !head.indexable {
        meta.push_str("<meta name=\"robots\" content=\"noindex\">\n");
    }
    let canonical = ctx
        .base_url
        .zip(head.canonical)
        .and_then(|(base, path)| canonical_url(base, path));
    if let Some(href) = canonical {
        meta.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape(href.as_str())
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site}</title>\n\
         {meta}\
         </head>\n\
         <body>\n\
         <header class=\"site-header\"><a href=\"/\">{site}</a>\n\
         <nav><a href=\"/services\">Services</a> <a href=\"{privacy}\">Privacy</a></nav>\n\
         </header>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape(head.title),
        site = escape(ctx.site_name),
        meta = meta,
        privacy = PRIVACY_PATH,
        body = body,
    )
}

/// Hero block wrapped around a service page's content.
pub fn service_detail_layout(page: &ServicePage, content: &str) -> String {
    format!(
        "<section class=\"service-detail\">\n\
         <div class=\"service-hero\">\n\
         <span class=\"icon\" data-icon=\"{icon}\" aria-hidden=\"true\"></span>\n\
         <h1>{title}</h1>\n\
         <p class=\"subtitle\">{subtitle}</p>\n\
         </div>\n\
         {content}\
         </section>\n",
        icon = escape(page.icon),
        title = escape(page.title),
        subtitle = escape(page.subtitle),
        content = content,
    )
}

/// Bullet list of the services offered on a page.
pub fn service_detail_content(page: &ServicePage) -> String {
    let mut out = String::from("<ul class=\"service-list\">\n");
    for item in page.services {
        out.push_str(&format!("<li class=\"service-item\">{}</li>\n", escape(item)));
    }
    out.push_str("</ul>\n");
    out
}

pub fn render_service_page(ctx: RenderContext<'_>, page: &ServicePage) -> String {
    let path = page.path();
    let body = service_detail_layout(page, &service_detail_content(page));
    document(
        ctx,
        Head {
            title: page.title,
            description: page.subtitle,
            keywords: &[],
            canonical: Some(&path),
            indexable: true,
        },
        &body,
    )
}

pub fn render_services_index(ctx: RenderContext<'_>) -> String {
    let mut body = String::from("<h1>Our Services</h1>\n<ul class=\"service-index\">\n");
    for page in SERVICE_PAGES {
        body.push_str(&format!(
            "<li><a href=\"{path}\"><span class=\"icon\" data-icon=\"{icon}\" aria-hidden=\"true\"></span>{title}</a></li>\n",
            path = page.path(),
            icon = escape(page.icon),
            title = escape(page.title),
        ));
    }
    body.push_str("</ul>\n");
    document(
        ctx,
        Head {
            title: "Services",
            description: "IT services from cloud hosting to DevOps.",
            keywords: &[],
            canonical: Some("/services"),
            indexable: true,
        },
        &body,
    )
}

pub fn render_privacy_policy(ctx: RenderContext<'_>) -> String {
    let PageMetadata {
        title,
        description,
        keywords,
    } = PRIVACY_METADATA;

    let mut body = format!("<article class=\"policy\">\n<h1>{}</h1>\n", escape(title));
    for section in PRIVACY_SECTIONS {
        body.push_str(&format!("<h2>{}</h2>\n", escape(section.heading)));
        for paragraph in section.paragraphs {
            body.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
        }
    }
    body.push_str("</article>\n");

    document(
        ctx,
        Head {
            title,
            description,
            keywords,
            canonical: Some(PRIVACY_PATH),
            indexable: true,
        },
        &body,
    )
}

pub fn render_not_found(ctx: RenderContext<'_>, path: &str) -> String {
    let body = format!(
        "<h1>Page not found</h1>\n<p>Nothing lives at <code>{}</code>.</p>\n<p><a href=\"/services\">Browse our services</a></p>\n",
        escape(path)
    );
    document(
        ctx,
        Head {
            title: "Page not found",
            description: "The requested page does not exist.",
            keywords: &[],
            canonical: None,
            indexable: false,
        },
        &body,
    )
}

/// Legacy page: a loading indicator plus, if the fallback navigated, the
/// script that replaces the current history entry.
pub fn render_legacy_page(
    ctx: RenderContext<'_>,
    view: FallbackView,
    target: Option<&str>,
) -> String {
    let mut body = format!(
        "<div class=\"loading\" role=\"status\" aria-live=\"polite\">\n\
         <span class=\"spinner\" aria-hidden=\"true\"></span>\n\
         <p>{}</p>\n\
         </div>\n",
        escape(view.label)
    );
    if let Some(target) = target {
        body.push_str(&format!(
            "<script>window.location.replace({});</script>\n",
            script_string(target)
        ));
    }
    document(
        ctx,
        Head {
            title: view.label,
            description: "This page has moved.",
            keywords: &[],
            canonical: None,
            indexable: false,
        },
        &body,
    )
}

/// A JS string literal safe to embed inside `<script>`.
fn script_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"/\"".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::{find_service, CLOUD_HOSTING};

    fn ctx() -> RenderContext<'static> {
        RenderContext {
            site_name: "Acme IT",
            base_url: None,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <b>\"x\"</b>"), "R&amp;D &lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_service_page() {
        let html = render_service_page(ctx(), &CLOUD_HOSTING);
        assert!(html.contains("<h1>Cloud Hosting</h1>"));
        assert!(html.contains("<title>Cloud Hosting | Acme IT</title>"));
        assert!(html.contains("data-icon=\"cloud\""));
        assert_eq!(html.matches("<li class=\"service-item\">").count(), 8);
        assert!(html.contains("Load Balancing &amp; Auto-Scaling"));
        assert!(!html.contains("rel=\"canonical\""));
    }

    #[test]
    fn test_canonical_link() {
        let base = Url::parse("https://example.com").unwrap();
        let ctx = RenderContext {
            site_name: "Acme IT",
            base_url: Some(&base),
        };
        let html = render_service_page(ctx, find_service("devops").unwrap());
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/services/devops\">"));
    }

    #[test]
    fn test_canonical_link_keeps_base_path() {
        for raw in ["https://example.com/site/", "https://example.com/site"] {
            let base = Url::parse(raw).unwrap();
            let ctx = RenderContext {
                site_name: "Acme IT",
                base_url: Some(&base),
            };
            let html = render_privacy_policy(ctx);
            assert!(
                html.contains("href=\"https://example.com/site/privacy-policy\""),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_not_found_has_no_canonical_link() {
        let base = Url::parse("https://example.com").unwrap();
        let ctx = RenderContext {
            site_name: "Acme IT",
            base_url: Some(&base),
        };
        let html = render_not_found(ctx, "//evil.example/x");
        assert!(!html.contains("rel=\"canonical\""));
        assert!(!html.contains("https://evil.example"));
        assert!(html.contains("<code>//evil.example/x</code>"));
    }

    #[test]
    fn test_index_links_every_page() {
        let html = render_services_index(ctx());
        for page in SERVICE_PAGES {
            assert!(html.contains(&format!("href=\"/services/{}\"", page.slug)));
        }
    }

    #[test]
    fn test_privacy_metadata() {
        let html = render_privacy_policy(ctx());
        assert!(html.contains("<title>Privacy Policy | Acme IT</title>"));
        assert!(html.contains(
            "<meta name=\"keywords\" content=\"privacy policy, data protection, personal information, cookies, GDPR\">"
        ));
        assert!(html.contains("<meta name=\"description\" content=\"How we collect"));
    }

    #[test]
    fn test_legacy_page() {
        let html = render_legacy_page(ctx(), FallbackView::LOADING, Some("/services"));
        assert!(html.contains("Redirecting…"));
        assert_eq!(html.matches("window.location.replace(").count(), 1);
        assert!(html.contains("window.location.replace(\"/services\");"));
        assert!(html.contains("noindex"));

        let stalled = render_legacy_page(ctx(), FallbackView::LOADING, None);
        assert!(stalled.contains("class=\"spinner\""));
        assert!(!stalled.contains("<script>"));
    }

    #[test]
    fn test_script_string_cannot_close_tag() {
        assert_eq!(script_string("/a</script>"), "\"/a<\\/script>\"");
    }
}
