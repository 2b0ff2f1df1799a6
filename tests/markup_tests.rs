// Host-side tests for carousel and modal markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use folio_core::constants::{MSG_EMPTY_TITLE, MSG_LOADING, MSG_LOAD_FAILED_TITLE};
use folio_core::{BannerKind, Category, Project, RecordId};
use markup::*;

fn project(json: serde_json::Value) -> Project {
    serde_json::from_value(json).unwrap()
}

fn category(name: &str, projects: Vec<Project>) -> Category {
    Category {
        id: RecordId::Number(1),
        name: name.to_string(),
        description: String::new(),
        projects,
    }
}

#[test]
fn escapes_html_specials() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn state_views_are_distinct() {
    let loading = loading_html();
    assert!(loading.contains(MSG_LOADING));
    assert!(loading.contains("folio-spinner"));

    let failed = failed_html("HTTP error! status: 500");
    assert!(failed.contains(MSG_LOAD_FAILED_TITLE));
    assert!(failed.contains("data-action='retry'"));

    let empty = empty_html();
    assert!(empty.contains(MSG_EMPTY_TITLE));
    assert!(!empty.contains(MSG_LOAD_FAILED_TITLE));
    assert!(!empty.contains("retry"));
}

#[test]
fn failure_reason_is_escaped() {
    let html = failed_html("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn slide_has_nav_and_one_dot_per_category() {
    let p = project(serde_json::json!({"id": 1, "title": "Shop"}));
    let cats = vec![
        category("Web", vec![p.clone()]),
        category("Data", vec![p.clone()]),
        category("Games", vec![p.clone()]),
    ];
    let html = slide_html(&cats, 1, &[p]);
    assert!(html.contains(">Data</h3>"));
    assert!(html.contains("data-action='prev'"));
    assert!(html.contains("data-action='next'"));
    assert_eq!(html.matches("data-action='goto'").count(), 3);
    assert!(html.contains("class='folio-dot active' data-action='goto' data-index='1'"));
    assert_eq!(html.matches("folio-dot active").count(), 1);
    assert_eq!(html.matches("<article").count(), 1);
}

#[test]
fn slide_for_missing_category_is_empty_state() {
    assert_eq!(slide_html(&[], 0, &[]), empty_html());
}

#[test]
fn card_collapses_extra_tools() {
    let p = project(serde_json::json!({
        "id": 5,
        "title": "Kit",
        "tools_list": ["Rust", "Wasm", "Canvas", "Serde", "Glam"]
    }));
    let html = card_html(&p, 0, false);
    assert_eq!(html.matches("class='folio-tool'").count(), 3);
    assert!(html.contains("+2 more"));
    assert!(!html.contains("Serde"));
}

#[test]
fn featured_card_gets_more_button() {
    let featured = project(serde_json::json!({"id": 1, "title": "A", "featured": true}));
    let plain = project(serde_json::json!({"id": 2, "title": "B"}));
    let html = card_html(&featured, 2, false);
    assert!(html.contains("data-action='open' data-index='2'"));
    assert!(html.contains("More..."));
    assert!(!card_html(&plain, 0, false).contains("data-action='open'"));
}

#[test]
fn mobile_cards_use_contained_tall_images() {
    let p = project(serde_json::json!({"id": 1, "title": "App", "project_image": "/m/a.png"}));
    let mobile = card_html(&p, 0, true);
    assert!(mobile.contains("object-fit:contain"));
    assert!(mobile.contains(&format!("height:{}px", constants::MOBILE_IMAGE_HEIGHT)));
    assert!(mobile.contains("src='https://mfundodev.com/m/a.png'"));
    assert!(card_html(&p, 0, false).contains("object-fit:cover"));
}

#[test]
fn card_links_and_date() {
    let p = project(serde_json::json!({
        "id": 1,
        "title": "Site",
        "repo_link": "https://github.com/x/y",
        "live_link": "",
        "created_at": "2023-11-02T08:00:00Z"
    }));
    let html = card_html(&p, 0, false);
    assert!(html.contains("href='https://github.com/x/y'"));
    assert!(!html.contains(">Live<"));
    assert!(html.contains("2023-11-02"));
    let undated = card_html(&project(serde_json::json!({"id": 2})), 0, false);
    assert!(undated.contains("Unknown date"));
}

#[test]
fn card_without_id_keys_by_slot() {
    let p = project(serde_json::json!({"title": "Anon", "description": null}));
    assert!(card_html(&p, 2, false).contains("data-key='slot-2'"));
    let q = project(serde_json::json!({"id": 8, "title": "Known"}));
    assert!(card_html(&q, 2, false).contains("data-key='8'"));
}

#[test]
fn modal_shows_full_detail() {
    let p = project(serde_json::json!({
        "id": 1,
        "title": "Tracker <beta>",
        "description": "Tracks things",
        "tools_used": "Kotlin, Room",
        "featured": true
    }));
    let html = modal_html(&p, "Mobile Apps");
    assert!(html.contains("Tracker &lt;beta&gt;"));
    assert!(html.contains("Tracks things"));
    assert!(html.contains("Kotlin") && html.contains("Room"));
    assert!(html.contains("Mobile Apps"));
    assert!(html.contains("Featured Project"));
    assert!(html.matches("data-action='close'").count() >= 2);

    let bare = modal_html(&project(serde_json::json!({"id": 2})), "Web");
    assert!(bare.contains("No description available"));
    assert!(!bare.contains("Featured Project"));
}

#[test]
fn banner_colors_follow_kind() {
    let (ok_class, ok_style) = banner_attrs(BannerKind::Success);
    let (err_class, err_style) = banner_attrs(BannerKind::Error);
    assert!(ok_class.contains("success"));
    assert!(err_class.contains("error"));
    assert_ne!(ok_style, err_style);
}
