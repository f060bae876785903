use site_behavior::core::ClassToggle;
use site_behavior::domain::model::{Disposition, Feature};
use site_behavior::domain::ports::TextField;
use site_behavior::{HeadlessPage, HeadlessSession, Node, SiteConfig};

const FOUND_DONATE: &str =
    "Found \"donate\" on this page. Use Ctrl+F (Cmd+F on Mac) to highlight all instances.";

fn features(session: &HeadlessSession) -> Vec<Feature> {
    session.wirings().iter().map(|w| w.feature()).collect()
}

#[test]
fn test_empty_page_attaches_nothing_but_reveal() {
    let page = HeadlessPage::new();
    page.add(Node::new("p").text("Welcome"));

    let session = HeadlessSession::ready(page, SiteConfig::default());

    assert_eq!(features(&session), vec![Feature::ScrollReveal]);
    assert!(session.map().is_none());
    assert!(session.notices().is_empty());
}

#[test]
fn test_search_requires_both_button_and_input() {
    let page = HeadlessPage::new();
    let button = page.add(Node::new("button").id("searchBtn"));

    let session = HeadlessSession::ready(page, SiteConfig::default());

    assert!(!features(&session).contains(&Feature::Search));
    session.click(&button);
    assert!(session.notices().is_empty());
}

#[test]
fn test_search_button_reports_presence() {
    let page = HeadlessPage::new();
    page.add(Node::new("h1").text("Support Our Work"));
    page.add(Node::new("p").text("Donate to help families in Rangpur."));
    let input = page.add(Node::new("input").id("searchInput"));
    let button = page.add(Node::new("button").id("searchBtn"));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    input.set_value("  DONATE ");
    session.click(&button);
    input.set_value("Chittagong");
    session.click(&button);
    input.set_value("   ");
    session.click(&button);

    assert_eq!(
        session.notices(),
        vec![
            FOUND_DONATE.to_string(),
            "No results found for \"chittagong\" on this page. Try searching on other pages."
                .to_string(),
            "Please enter a search term.".to_string(),
        ]
    );
}

#[test]
fn test_search_on_enter_only() {
    let page = HeadlessPage::new();
    page.add(Node::new("p").text("Donate today"));
    let input = page.add(Node::new("input").id("searchInput"));
    page.add(Node::new("button").id("searchBtn"));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    input.set_value("donate");
    session.key_press(&input, "d");
    assert!(session.notices().is_empty());

    session.key_press(&input, "Enter");
    assert_eq!(session.notices(), vec![FOUND_DONATE.to_string()]);
}

#[test]
fn test_subscribe_clears_only_valid_address() {
    let page = HeadlessPage::new();
    let input = page.add(Node::new("input").id("emailInput"));
    let button = page.add(Node::new("button").id("subscribeBtn"));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    input.set_value("user@example");
    session.click(&button);
    assert_eq!(input.value(), "user@example");

    input.set_value("user@example.com");
    session.click(&button);
    assert_eq!(input.value(), "");

    assert_eq!(
        session.notices(),
        vec![
            "Please enter a valid email address.".to_string(),
            "Thank you for subscribing! We will keep you updated on our work.".to_string(),
        ]
    );
}

#[test]
fn test_amount_buttons_keep_single_selection() {
    let page = HeadlessPage::new();
    let buttons: Vec<_> = ["$25", "$50", "$100", "Other"]
        .iter()
        .map(|label| page.add(Node::new("button").class("amount-btn").text(label)))
        .collect();
    let session = HeadlessSession::ready(page, SiteConfig::default());

    for clicked in [0, 2, 2, 1, 3] {
        session.click(&buttons[clicked]);
        let selected: Vec<usize> = buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.has_class("selected"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![clicked]);
    }
    assert!(session.notices().is_empty());
}

#[test]
fn test_form_submit_prevents_navigation_and_resets() {
    let page = HeadlessPage::new();
    let contact = page.add(Node::new("form").id("contact-form"));
    let name = page.add(Node::new("input").in_form(&contact));
    let topic = page.add(Node::new("select").default_value("general").in_form(&contact));
    let volunteer = page.add(Node::new("form"));
    let hours = page.add(Node::new("input").default_value("2").in_form(&volunteer));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    name.set_value("Ayesha");
    topic.set_value("donations");
    hours.set_value("10");

    assert_eq!(session.submit(&contact), Disposition::PreventDefault);
    assert_eq!(name.value(), "");
    assert_eq!(topic.value(), "general");
    // Other forms keep their values.
    assert_eq!(hours.value(), "10");

    assert_eq!(session.submit(&volunteer), Disposition::PreventDefault);
    assert_eq!(hours.value(), "2");

    assert_eq!(
        session.notices(),
        vec![
            "Thank you for your message! We will get back to you soon.".to_string(),
            "Thank you for your message! We will get back to you soon.".to_string(),
        ]
    );
}

#[test]
fn test_allow_listed_fragment_scrolls_smoothly() {
    let page = HeadlessPage::new();
    let links: Vec<_> = ["#donate", "#contact", "#contact-form", "#social"]
        .iter()
        .map(|href| page.add(Node::new("a").href(href)))
        .collect();
    for id in ["donate", "contact", "contact-form", "social"] {
        page.add(Node::new("section").id(id));
    }
    let session = HeadlessSession::ready(page, SiteConfig::default());

    for link in &links {
        assert_eq!(session.click(link), Disposition::PreventDefault);
    }
    assert_eq!(
        session.page().scrolled_to(),
        vec!["donate", "contact", "contact-form", "social"]
    );
}

#[test]
fn test_other_fragments_keep_native_jump() {
    let page = HeadlessPage::new();
    let programs = page.add(Node::new("a").href("#programs"));
    let missing = page.add(Node::new("a").href("#donate"));
    let root = page.add(Node::new("a").href("#"));
    page.add(Node::new("section").id("programs"));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    assert_eq!(session.click(&programs), Disposition::Default);
    // "#donate" is allow-listed but this page has no such section.
    assert_eq!(session.click(&missing), Disposition::Default);
    assert_eq!(session.click(&root), Disposition::Default);
    assert!(session.page().scrolled_to().is_empty());
}

#[test]
fn test_external_links_are_not_wired() {
    let page = HeadlessPage::new();
    let external = page.add(Node::new("a").href("https://example.org/#donate"));
    page.add(Node::new("section").id("donate"));
    let session = HeadlessSession::ready(page, SiteConfig::default());

    assert!(!features(&session).contains(&Feature::SmoothScroll));
    assert_eq!(session.click(&external), Disposition::Default);
    assert!(session.page().scrolled_to().is_empty());
}

#[test]
fn test_custom_ids_from_config() {
    let config = SiteConfig::from_toml_str(
        r#"
[search]
button_id = "find"
input_id = "terms"
"#,
    )
    .unwrap();
    let page = HeadlessPage::new();
    page.add(Node::new("p").text("Khulna"));
    let input = page.add(Node::new("input").id("terms"));
    let button = page.add(Node::new("button").id("find"));
    let session = HeadlessSession::ready(page, config);

    input.set_value("khulna");
    session.click(&button);
    assert_eq!(session.notices().len(), 1);
    assert!(session.notices()[0].starts_with("Found \"khulna\""));
}
