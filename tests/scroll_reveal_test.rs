use site_behavior::{HeadlessPage, HeadlessSession, Node, SiteConfig};

#[test]
fn test_nothing_is_hidden_before_load() {
    let page = HeadlessPage::new();
    let card = page.add(Node::new("div").class("focus-card"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());

    assert_eq!(card.style("opacity"), None);
    assert!(!session.intersect(&card, 1.0));
    assert_eq!(session.observed(), 0);
}

#[test]
fn test_load_hides_every_animated_class_once() {
    let page = HeadlessPage::new();
    let cards = [
        page.add(Node::new("div").class("focus-card")),
        page.add(Node::new("div").class("help-card")),
        page.add(Node::new("div").class("region-card")),
        page.add(Node::new("div").class("stat")),
        page.add(Node::new("li").class("impact-item")),
        // Matches two classes; still a single element.
        page.add(Node::new("div").class("stat").class("help-card")),
    ];
    let plain = page.add(Node::new("div").class("hero"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());

    session.load();

    assert_eq!(session.observed(), cards.len());
    for card in &cards {
        assert_eq!(card.style("opacity").as_deref(), Some("0"));
        assert_eq!(card.style("transform").as_deref(), Some("translateY(20px)"));
        assert_eq!(
            card.style("transition").as_deref(),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
    }
    assert_eq!(plain.style("opacity"), None);
}

#[test]
fn test_reveal_at_ten_percent_and_never_revert() {
    let page = HeadlessPage::new();
    let stat = page.add(Node::new("div").class("stat"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());
    session.load();

    assert!(!session.intersect(&stat, 0.05));
    assert_eq!(stat.style("opacity").as_deref(), Some("0"));

    assert!(session.intersect(&stat, 0.1));
    assert_eq!(stat.style("opacity").as_deref(), Some("1"));
    assert_eq!(stat.style("transform").as_deref(), Some("translateY(0)"));

    // Scrolled away and back: no second transition, no reset.
    assert!(!session.intersect(&stat, 0.0));
    assert!(!session.intersect(&stat, 0.8));
    assert_eq!(stat.style("opacity").as_deref(), Some("1"));
}

#[test]
fn test_elements_reveal_independently() {
    let page = HeadlessPage::new();
    let first = page.add(Node::new("div").class("region-card"));
    let second = page.add(Node::new("div").class("region-card"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());
    session.load();

    assert!(session.intersect(&second, 0.5));
    assert_eq!(first.style("opacity").as_deref(), Some("0"));
    assert!(session.intersect(&first, 0.3));
    assert_eq!(first.style("opacity").as_deref(), Some("1"));
}

#[test]
fn test_second_load_keeps_revealed_state() {
    let page = HeadlessPage::new();
    let item = page.add(Node::new("li").class("impact-item"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());
    session.load();
    session.intersect(&item, 1.0);

    session.load();
    assert_eq!(item.style("opacity").as_deref(), Some("1"));
}

#[test]
fn test_reveal_needs_threshold_crossing() {
    let page = HeadlessPage::new();
    let card = page.add(Node::new("div").class("help-card"));
    let mut session = HeadlessSession::ready(page, SiteConfig::default());
    session.load();

    // Peeking in and out without reaching 10% delivers nothing.
    assert!(!session.intersect(&card, 0.02));
    assert!(!session.intersect(&card, 0.0));
    assert_eq!(card.style("opacity").as_deref(), Some("0"));

    assert!(session.intersect(&card, 0.25));
    assert_eq!(card.style("opacity").as_deref(), Some("1"));
}
