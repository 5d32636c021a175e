//! HTML rendering for the single-page site.
//!
//! All dynamic text goes through [`html_escape`]. Renderers take what they
//! show as arguments; none of them reads global state.

use crate::contact::{ContactForm, ContactReceipt};
use crate::content::{
    self, CONTACT_INFO, LAB_NAME, MEMBERS, MILESTONES, NAV_ITEMS, PROJECTS, SERVICES,
};
use crate::models::{Category, Publication};
use crate::particles::ParticleField;
use crate::publications::{DataSource, PanelView};
use crate::reveal::{RevealObserver, reveal_attrs};
use crate::theme::ThemeContext;

/// State of the contact form for this render.
#[derive(Debug, Clone, Copy)]
pub enum ContactState<'a> {
    /// Empty form.
    Blank,
    /// Re-show the visitor's input with an error.
    Invalid { form: &'a ContactForm, error: &'a str },
    /// Submission accepted; form is cleared and a confirmation dialog is open.
    Sent(&'a ContactReceipt),
}

/// Everything the page needs.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub theme: ThemeContext,
    pub panel: &'a PanelView,
    pub particles: &'a ParticleField,
    pub contact: ContactState<'a>,
    /// Copyright year in the footer.
    pub year: i32,
}

/// Render the whole page.
#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let html_class = ctx.theme.theme.html_class();
    let class_attr =
        if html_class.is_empty() { String::new() } else { format!(r#" class="{html_class}""#) };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{class_attr}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/site.css">
<script src="/assets/site.js" defer></script>
</head>
<body>
{nav}
<main>
{hero}
{about}
{services}
{portfolio}
{members}
{publications}
{contact}
</main>
{footer}
</body>
</html>"#,
        title = html_escape(LAB_NAME),
        nav = render_nav(ctx.theme),
        hero = render_hero(ctx.particles),
        about = render_about(),
        services = render_services(),
        portfolio = render_portfolio(),
        members = render_members(),
        publications = render_publications(ctx.panel),
        contact = render_contact(ctx.contact),
        footer = render_footer(ctx.year),
    )
}

/// Navigation bar with in-page anchors, the external login link and the theme toggle.
#[must_use]
pub fn render_nav(theme: ThemeContext) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="{}" data-scroll>{}</a></li>"#,
                item.href(),
                html_escape(item.label)
            )
        })
        .collect();

    let (icon, label) = if theme.is_dark() {
        ("☀", "Switch to light theme")
    } else {
        ("☾", "Switch to dark theme")
    };

    format!(
        r##"<nav class="site-nav" id="site-nav">
<a class="logo" href="#home" data-scroll>{lab}</a>
<button class="menu-toggle" type="button" aria-controls="nav-links" aria-expanded="false">☰</button>
<ul class="nav-links" id="nav-links">{links}<li><a href="{login}" target="_blank" rel="noopener noreferrer">Login</a></li></ul>
<form method="post" action="/theme" class="theme-toggle"><button type="submit" aria-label="{label}">{icon}</button></form>
</nav>"##,
        lab = html_escape(LAB_NAME),
        login = html_escape(content::LOGIN_URL),
    )
}

#[must_use]
pub fn render_hero(particles: &ParticleField) -> String {
    let dots: String = particles
        .particles()
        .iter()
        .map(|p| format!(r#"<span class="particle" style="{}"></span>"#, p.style()))
        .collect();

    format!(
        r##"<section id="home" class="hero">
<div class="particles" aria-hidden="true">{dots}</div>
<h1><span class="typed" data-typed="{headline}">{headline}</span></h1>
<img src="/static/main.png" alt="Lab logo" draggable="false">
<p class="tagline">{tagline}</p>
<div class="hero-actions">
<a class="button" href="#portfolio" data-scroll>Projects</a>
<a class="button secondary" href="#contact" data-scroll>Contact with us</a>
</div>
<a class="scroll-down" href="#about" data-scroll aria-label="Scroll to about">⌄</a>
</section>"##,
        headline = html_escape(content::HERO_HEADLINE),
        tagline = html_escape(content::HERO_TAGLINE),
    )
}

#[must_use]
pub fn render_about() -> String {
    let observer = RevealObserver::default();
    let timeline: String = MILESTONES
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                r#"<li {attrs}><span class="year">{}</span><h4>{}</h4><p>{}</p></li>"#,
                html_escape(m.year),
                html_escape(m.title),
                html_escape(m.description),
                attrs = reveal_attrs(&observer, stagger(i, 100)),
            )
        })
        .collect();

    format!(
        r#"<section id="about" {attrs}>
<h2>About <span class="gradient-text">Us</span></h2>
<p>{text}</p>
<ol class="timeline">{timeline}</ol>
</section>"#,
        attrs = reveal_attrs(&observer, 0),
        text = html_escape(content::ABOUT_TEXT),
    )
}

#[must_use]
pub fn render_services() -> String {
    let observer = RevealObserver::default();
    let cards: String = SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let features: String =
                s.features.iter().map(|f| format!("<li>{}</li>", html_escape(f))).collect();
            format!(
                r#"<article class="card" {attrs}><div class="icon">{}</div><h3>{}</h3><p>{}</p><ul>{features}</ul></article>"#,
                s.icon,
                html_escape(s.title),
                html_escape(s.description),
                attrs = reveal_attrs(&observer, stagger(i, 100)),
            )
        })
        .collect();

    format!(
        r#"<section id="services" {attrs}>
<h2>Our <span class="gradient-text">Research</span></h2>
<div class="grid">{cards}</div>
</section>"#,
        attrs = reveal_attrs(&observer, 0),
    )
}

#[must_use]
pub fn render_portfolio() -> String {
    let observer = RevealObserver::default();
    let cards: String = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let tech: String = p
                .technologies
                .iter()
                .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
                .collect();
            let metrics: String =
                p.metrics.iter().map(|m| format!("<li>{}</li>", html_escape(m))).collect();
            format!(
                r#"<details class="card project" {attrs}>
<summary><img src="{}" alt="{title}" loading="lazy"><span class="tag">{}</span><h3>{title}</h3><p>{}</p></summary>
<div class="project-detail"><h4>Technologies</h4><div>{tech}</div><h4>Results</h4><ul>{metrics}</ul></div>
</details>"#,
                html_escape(p.image),
                html_escape(p.category),
                html_escape(p.description),
                title = html_escape(p.title),
                attrs = reveal_attrs(&observer, stagger(i, 150)),
            )
        })
        .collect();

    format!(
        r#"<section id="portfolio" {attrs}>
<h2>Our <span class="gradient-text">Activities</span></h2>
<div class="grid">{cards}</div>
</section>"#,
        attrs = reveal_attrs(&observer, 0),
    )
}

#[must_use]
pub fn render_members() -> String {
    let observer = RevealObserver::default();
    let cards: String = MEMBERS
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                r#"<article class="card member" {attrs}><img src="{}" alt="{name}" loading="lazy"><h3>{name}</h3><p class="role">{}</p><p class="expertise">{}</p><p>{}</p></article>"#,
                html_escape(m.image),
                html_escape(m.role),
                html_escape(m.expertise),
                html_escape(m.bio),
                name = html_escape(m.name),
                attrs = reveal_attrs(&observer, stagger(i, 100)),
            )
        })
        .collect();

    format!(
        r#"<section id="members" {attrs}>
<h2>Lab <span class="gradient-text">Members</span></h2>
<div class="grid">{cards}</div>
</section>"#,
        attrs = reveal_attrs(&observer, 0),
    )
}

/// Publications panel: category filter, status, cards and pagination.
#[must_use]
pub fn render_publications(view: &PanelView) -> String {
    let filters: String = Category::ALL
        .iter()
        .map(|c| {
            let pressed = *c == view.category;
            format!(
                r#"<button type="submit" name="category" value="{}" aria-pressed="{pressed}"{class}>{}</button>"#,
                c.id(),
                html_escape(c.label()),
                class = if pressed { r#" class="active""# } else { "" },
            )
        })
        .collect();

    let mut body = String::new();

    if let Some(error) = &view.error {
        body.push_str(&format!(
            r#"<div class="error-banner" role="alert"><p>{}</p><p>Showing selected publications instead.</p>"#,
            html_escape(error)
        ));
        if view.can_retry {
            body.push_str(
                r#"<form method="post" action="/publications/refresh"><button type="submit">Try again</button></form>"#,
            );
        }
        body.push_str("</div>");
    } else if view.loading {
        body.push_str(r#"<p class="loading" aria-live="polite">Loading publications…</p>"#);
    }

    if view.items.is_empty() && !view.loading {
        body.push_str(r#"<p class="empty">No publications found on this page.</p>"#);
    }

    let cards: String =
        view.items.iter().enumerate().map(|(i, p)| render_publication_card(p, i)).collect();
    body.push_str(&format!(r#"<div class="publication-list">{cards}</div>"#));

    if view.show_pagination {
        body.push_str(&render_pagination(view));
    }

    let source = match view.source {
        DataSource::Live => "live",
        DataSource::Fallback => "fallback",
    };

    format!(
        r#"<section id="publications" data-source="{source}" {attrs}>
<h2><span class="gradient-text">Publications</span></h2>
<form method="post" action="/publications/category" class="category-filter">{filters}</form>
{body}
<p class="deep-link"><a href="{link}" target="_blank" rel="noopener noreferrer">Browse all on Google Scholar</a></p>
</section>"#,
        attrs = reveal_attrs(&RevealObserver::default(), 0),
        link = html_escape(&view.deep_link),
    )
}

/// One publication card; absent fields are left out entirely.
#[must_use]
pub fn render_publication_card(publication: &Publication, index: usize) -> String {
    let mut meta = String::new();
    if let Some(authors) = publication.author_line() {
        meta.push_str(&format!(r#"<span class="authors">{}</span>"#, html_escape(&authors)));
    }
    if let Some(year) = publication.year {
        meta.push_str(&format!(r#"<span class="year">{year}</span>"#));
    }

    let mut card = format!(
        r#"<article class="card publication" {attrs}>"#,
        attrs = reveal_attrs(&RevealObserver::default(), stagger(index, 100)),
    );
    card.push_str(&format!("<h3>{}</h3>", html_escape(&publication.title)));
    if let Some(kind) = &publication.kind {
        card.push_str(&format!(r#"<span class="tag">{}</span>"#, html_escape(kind)));
    }
    if !meta.is_empty() {
        card.push_str(&format!(r#"<div class="meta">{meta}</div>"#));
    }
    if let Some(summary) = &publication.summary {
        card.push_str(&format!(r#"<p class="abstract">{}</p>"#, html_escape(summary)));
    }
    if let Some(venue) = &publication.venue {
        card.push_str(&format!(r#"<p class="venue">Published in: {}</p>"#, html_escape(venue)));
    }
    if let Some(link) = &publication.link {
        card.push_str(&format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener noreferrer">Read More</a>"#,
            html_escape(link)
        ));
    }
    card.push_str("</article>");
    card
}

/// Previous/next controls; disabled at the boundaries.
#[must_use]
pub fn render_pagination(view: &PanelView) -> String {
    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };
    format!(
        r#"<nav class="pagination" aria-label="Publication pages">
<form method="post" action="/publications/previous"><button type="submit"{prev}>Previous</button></form>
<span class="page-indicator">Page {page} of {pages}</span>
<form method="post" action="/publications/next"><button type="submit"{next}>Next</button></form>
</nav>"#,
        prev = disabled(view.has_previous),
        next = disabled(view.has_next),
        page = view.page,
        pages = view.total_pages,
    )
}

#[must_use]
pub fn render_contact(state: ContactState<'_>) -> String {
    let blank = ContactForm::default();
    // a posted form lands on #contact, so the section is already in view
    let mut observer = RevealObserver::default();
    if !matches!(state, ContactState::Blank) {
        observer.observe(1.0);
    }
    let (form, error, dialog) = match state {
        ContactState::Blank => (&blank, None, None),
        ContactState::Invalid { form, error } => (form, Some(error), None),
        ContactState::Sent(receipt) => (&blank, None, Some(receipt)),
    };

    let error_html = error
        .map(|e| format!(r#"<div class="form-error" role="alert">{}</div>"#, html_escape(e)))
        .unwrap_or_default();

    let dialog_html = dialog
        .map(|r| {
            format!(
                r#"<dialog open class="confirmation"><p>Thank you for your message! We'll get back to you soon.</p><p class="reference">Reference {}</p><form method="dialog"><button>Close</button></form></dialog>"#,
                r.reference
            )
        })
        .unwrap_or_default();

    let info: String = CONTACT_INFO
        .iter()
        .map(|c| {
            format!(
                r#"<a class="contact-info" href="{}"><strong>{}</strong><span>{}</span></a>"#,
                html_escape(c.href),
                html_escape(c.title),
                html_escape(c.content)
            )
        })
        .collect();

    format!(
        r#"<section id="contact" {attrs}>
<h2>Get In <span class="gradient-text">Touch</span></h2>
{dialog_html}
<form method="post" action="/contact#contact" class="contact-form">
{error_html}
<label for="name">Name</label>
<input type="text" id="name" name="name" value="{name}" required placeholder="Your name">
<label for="email">Email</label>
<input type="email" id="email" name="email" value="{email}" required placeholder="your@email.com">
<label for="company">Company</label>
<input type="text" id="company" name="company" value="{company}" placeholder="Your company">
<label for="message">Message</label>
<textarea id="message" name="message" rows="5" required placeholder="Tell us about your project...">{message}</textarea>
<button type="submit">Send Message</button>
</form>
<div class="contact-details">{info}</div>
<iframe src="{map}" width="100%" height="350" style="border:0" loading="lazy" referrerpolicy="no-referrer-when-downgrade" title="Gachon University AI Engineering Hall Map"></iframe>
</section>"#,
        attrs = reveal_attrs(&observer, 0),
        name = html_escape(&form.name),
        email = html_escape(&form.email),
        company = html_escape(&form.company),
        message = html_escape(&form.message),
        map = html_escape(content::MAP_EMBED_URL),
    )
}

#[must_use]
pub fn render_footer(year: i32) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .skip(1)
        .map(|item| {
            format!(r#"<li><a href="{}" data-scroll>{}</a></li>"#, item.href(), html_escape(item.label))
        })
        .collect();

    format!(
        r#"<footer>
<p>Leading the future of technology with AI research.</p>
<ul>{links}</ul>
<p>&copy; {year} {lab}. All rights reserved.</p>
</footer>"#,
        lab = html_escape(LAB_NAME),
    )
}

fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
