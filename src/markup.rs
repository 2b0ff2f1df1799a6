use crate::constants::{CARD_TOOLS_SHOWN, MOBILE_IMAGE_HEIGHT};
use folio_core::constants::{
    MEDIA_BASE_URL, MSG_EMPTY_TEXT, MSG_EMPTY_TITLE, MSG_LOADING, MSG_LOAD_FAILED_TITLE,
};
use folio_core::{BannerKind, Category, Project};
use std::fmt::Write;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

pub fn loading_html() -> String {
    format!(
        "<div class='folio-state folio-loading'><div class='folio-spinner'></div><p>{}</p></div>",
        MSG_LOADING
    )
}

pub fn failed_html(reason: &str) -> String {
    format!(
        "<div class='folio-state folio-error'><h3>{}</h3><p>{}</p>\
         <button type='button' data-action='retry'>Try Again</button></div>",
        MSG_LOAD_FAILED_TITLE,
        escape_html(reason)
    )
}

pub fn empty_html() -> String {
    format!(
        "<div class='folio-state folio-empty'><h3>{}</h3><p>{}</p></div>",
        MSG_EMPTY_TITLE, MSG_EMPTY_TEXT
    )
}

/// Title, prev/next, the sampled cards and one dot per category.
pub fn slide_html(categories: &[Category], active: usize, slide: &[Project]) -> String {
    let Some(category) = categories.get(active) else {
        return empty_html();
    };
    let mobile = category.is_mobile();
    let mut html = String::new();
    _ = write!(
        html,
        "<div class='folio-carousel'><h3 class='folio-category'>{}</h3>",
        escape_html(&category.name)
    );
    if !category.description.is_empty() {
        _ = write!(
            html,
            "<p class='folio-category-desc'>{}</p>",
            escape_html(&category.description)
        );
    }
    html.push_str(
        "<div class='folio-nav'><button type='button' data-action='prev' aria-label='Previous category'>&#8249;</button>",
    );
    html.push_str("<div class='folio-grid'>");
    for (i, project) in slide.iter().enumerate() {
        html.push_str(&card_html(project, i, mobile));
    }
    html.push_str("</div>");
    html.push_str(
        "<button type='button' data-action='next' aria-label='Next category'>&#8250;</button></div>",
    );
    html.push_str("<div class='folio-dots'>");
    for (i, c) in categories.iter().enumerate() {
        _ = write!(
            html,
            "<button type='button' class='folio-dot{}' data-action='goto' data-index='{}' aria-label='{}'></button>",
            if i == active { " active" } else { "" },
            i,
            escape_html(&c.name)
        );
    }
    html.push_str("</div></div>");
    html
}

pub fn card_html(project: &Project, index: usize, mobile: bool) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        "<article class='folio-card' data-key='{}'>",
        escape_html(&project.card_key(index))
    );
    if let Some(url) = project.image_url(MEDIA_BASE_URL) {
        let style = if mobile {
            format!(
                "height:{}px;background:#ffffff;padding:12px;object-fit:contain",
                MOBILE_IMAGE_HEIGHT
            )
        } else {
            "object-fit:cover".to_string()
        };
        _ = write!(
            html,
            "<img src='{}' alt='{}' loading='lazy' style='{}'>",
            escape_html(&url),
            escape_html(&project.title),
            style
        );
    }
    _ = write!(html, "<h4>{}</h4>", escape_html(&project.title));

    let tools = project.tools();
    if !tools.is_empty() {
        html.push_str("<div class='folio-tools'>");
        for tool in tools.iter().take(CARD_TOOLS_SHOWN) {
            _ = write!(html, "<span class='folio-tool'>{}</span>", escape_html(tool));
        }
        if tools.len() > CARD_TOOLS_SHOWN {
            _ = write!(
                html,
                "<span class='folio-more-tools'>+{} more</span>",
                tools.len() - CARD_TOOLS_SHOWN
            );
        }
        html.push_str("</div>");
    }

    _ = write!(
        html,
        "<div class='folio-meta'><span class='folio-date'>{}</span>",
        escape_html(project.created_date().unwrap_or("Unknown date"))
    );
    html.push_str(&links_html(project));
    if project.featured {
        _ = write!(
            html,
            "<button type='button' class='folio-more' data-action='open' data-index='{}'>More...</button>",
            index
        );
    }
    html.push_str("</div></article>");
    html
}

fn links_html(project: &Project) -> String {
    let mut html = String::new();
    if let Some(repo) = project.repo_link.as_deref().filter(|s| !s.is_empty()) {
        _ = write!(
            html,
            "<a href='{}' target='_blank' rel='noopener noreferrer'>Code</a>",
            escape_html(repo)
        );
    }
    if let Some(live) = project.live_link.as_deref().filter(|s| !s.is_empty()) {
        _ = write!(
            html,
            "<a href='{}' target='_blank' rel='noopener noreferrer'>Live</a>",
            escape_html(live)
        );
    }
    html
}

/// Full detail view for one project.
pub fn modal_html(project: &Project, category_name: &str) -> String {
    let mut html = String::new();
    html.push_str("<div class='folio-modal-overlay' data-action='close'></div>");
    html.push_str("<div class='folio-modal-body' role='dialog' aria-modal='true'>");
    html.push_str(
        "<button type='button' class='folio-modal-close' data-action='close' aria-label='Close'>&times;</button>",
    );
    _ = write!(html, "<h3>{}</h3>", escape_html(&project.title));
    if let Some(url) = project.image_url(MEDIA_BASE_URL) {
        _ = write!(
            html,
            "<img src='{}' alt='{}'>",
            escape_html(&url),
            escape_html(&project.title)
        );
    }
    if project.description.trim().is_empty() {
        html.push_str("<p class='folio-muted'>No description available for this project.</p>");
    } else {
        _ = write!(html, "<p>{}</p>", escape_html(&project.description));
    }
    let tools = project.tools();
    if !tools.is_empty() {
        html.push_str("<h4>Tools &amp; Technologies</h4><div class='folio-tools'>");
        for tool in &tools {
            _ = write!(html, "<span class='folio-tool'>{}</span>", escape_html(tool));
        }
        html.push_str("</div>");
    }
    html.push_str(&links_html(project));
    _ = write!(
        html,
        "<div class='folio-modal-meta'><div><strong>Category:</strong> {}</div>\
         <div><strong>Created:</strong> {}</div>",
        escape_html(category_name),
        escape_html(project.created_date().unwrap_or("Unknown date"))
    );
    if project.featured {
        html.push_str("<div><strong>Status:</strong> <span class='folio-featured'>Featured Project</span></div>");
    }
    html.push_str("</div></div>");
    html
}

/// Class and inline colors for the contact status line.
pub fn banner_attrs(kind: BannerKind) -> (&'static str, &'static str) {
    match kind {
        BannerKind::Success => (
            "folio-status success",
            "display:block;padding:12px;border-radius:6px;background:#c6f6d5;color:#22543d",
        ),
        BannerKind::Error => (
            "folio-status error",
            "display:block;padding:12px;border-radius:6px;background:#fed7d7;color:#742a2a",
        ),
    }
}
