use kiefer_frontend::config;
use kiefer_frontend::content::StaticContentStore;
use kiefer_frontend::nav::{NavAction, PageId, ViewState};
use kiefer_frontend::render::{render, CredentialsBlock, ExpertiseBody, PageBody};
use pretty_assertions::assert_eq;

fn bundled() -> StaticContentStore {
    StaticContentStore::bundled().expect("bundled content parses")
}

#[test]
fn home_shows_every_service_and_tool() {
    let content = bundled();
    let rendered = render(&ViewState::new(), &content);

    let PageBody::Home(home) = rendered.body else {
        panic!("start page should be home");
    };
    let rendered_titles: Vec<&str> = home.services.iter().map(|c| c.title.as_str()).collect();
    let source_titles: Vec<&str> = content.services.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(rendered_titles, source_titles);
    assert_eq!(home.tools.len(), content.tools.len());
    assert_eq!(home.hero.name, "Kiefer & Kollegen");
}

#[test]
fn contact_overlay_closes_on_navigation() {
    let content = bundled();
    let mut state = ViewState::new();

    state.apply(NavAction::OpenContactModal);
    let rendered = render(&state, &content);
    assert_eq!(rendered.page, PageId::Home);
    assert_eq!(
        rendered.contact_overlay.map(|overlay| overlay.url),
        Some(config::CONTACT_FORM_URL)
    );

    for link in &content.header_links {
        state.apply(NavAction::OpenContactModal);
        state.apply(NavAction::SelectPage(link.target));
        let rendered = render(&state, &content);
        assert_eq!(rendered.page, link.target);
        assert!(rendered.contact_overlay.is_none());
    }
}

#[test]
fn about_page_keeps_all_credentials() {
    let content = bundled();
    let mut state = ViewState::new();
    state.apply(NavAction::SelectPage(PageId::AboutUs));

    let PageBody::AboutUs(about) = render(&state, &content).body else {
        panic!("expected about page");
    };
    let shapes: Vec<usize> = about
        .team
        .iter()
        .map(|member| match &member.credentials {
            CredentialsBlock::Tiles(tiles) => tiles.len(),
            CredentialsBlock::Text(_) => 1,
        })
        .collect();
    assert_eq!(shapes, vec![4, 2, 1]);
    assert!(matches!(about.team[2].credentials, CredentialsBlock::Text(_)));

    let highlighted: Vec<&str> = about
        .expertise
        .iter()
        .filter(|card| card.highlight)
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(highlighted, vec!["Aus- und Weiterbildung"]);
    assert!(about.expertise[0].cta.is_some());
    assert!(matches!(about.expertise[1].body, ExpertiseBody::Items(ref items) if items.len() == 4));
}

#[test]
fn footer_links_open_legal_pages() {
    let content = bundled();
    let mut state = ViewState::new();

    for link in &content.footer_links {
        state.apply(NavAction::SelectPage(link.target));
        let PageBody::Legal(document) = render(&state, &content).body else {
            panic!("{} should be a legal page", link.label);
        };
        assert_eq!(document.title, link.label);
        assert!(!document.sections.is_empty());
    }
}

#[test]
fn back_to_home_from_every_page() {
    let content = bundled();
    for page in PageId::ALL {
        let mut state = ViewState::new();
        state.select_page(page);
        state.select_page(PageId::Home);
        assert!(matches!(render(&state, &content).body, PageBody::Home(_)));
    }
}
