use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;
use yew::Reducible;

use crate::error::SiteError;

/// The closed set of top-level views the site can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum PageId {
    #[default]
    Home,
    Imprint,
    PrivacyPolicy,
    AboutUs,
    DocumentManagement,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Imprint,
        PageId::PrivacyPolicy,
        PageId::AboutUs,
        PageId::DocumentManagement,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Imprint => "impressum",
            PageId::PrivacyPolicy => "datenschutz",
            PageId::AboutUs => "ueber-uns",
            PageId::DocumentManagement => "dokumenten-verwaltung",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| SiteError::InvalidState { page: s.to_string() })
    }
}

impl TryFrom<String> for PageId {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which page is shown and whether the contact overlay sits on top of it.
///
/// Every page change closes the overlay and bumps `scroll_resets`, which the
/// app watches to jump the viewport back to the top before the next paint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    current_page: PageId,
    contact_modal_open: bool,
    scroll_resets: u32,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn contact_modal_open(&self) -> bool {
        self.contact_modal_open
    }

    /// Number of scroll-to-top requests issued so far.
    pub fn scroll_resets(&self) -> u32 {
        self.scroll_resets
    }

    pub fn select_page(&mut self, target: PageId) {
        self.current_page = target;
        self.contact_modal_open = false;
        self.scroll_resets = self.scroll_resets.wrapping_add(1);
    }

    /// Selects a page by its slug, failing on anything outside [`PageId::ALL`].
    pub fn select_slug(&mut self, slug: &str) -> Result<(), SiteError> {
        let target = slug.parse()?;
        self.select_page(target);
        Ok(())
    }

    pub fn open_contact_modal(&mut self) {
        self.contact_modal_open = true;
    }

    pub fn close_contact_modal(&mut self) {
        self.contact_modal_open = false;
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::SelectPage(target) => self.select_page(target),
            NavAction::OpenContactModal => self.open_contact_modal(),
            NavAction::CloseContactModal => self.close_contact_modal(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    SelectPage(PageId),
    OpenContactModal,
    CloseContactModal,
}

impl Reducible for ViewState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("navigation: {:?}", action);
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_modal_closed() {
        let state = ViewState::new();
        assert_eq!(state.current_page(), PageId::Home);
        assert!(!state.contact_modal_open());
        assert_eq!(state.scroll_resets(), 0);
    }

    #[test]
    fn selecting_any_page_closes_the_modal() {
        for page in PageId::ALL {
            let mut state = ViewState::new();
            state.open_contact_modal();
            state.select_page(page);
            assert_eq!(state.current_page(), page);
            assert!(!state.contact_modal_open(), "modal left open after {page}");
        }
    }

    #[test]
    fn selecting_a_page_requests_scroll_reset() {
        let mut state = ViewState::new();
        state.select_page(PageId::Imprint);
        state.select_page(PageId::Imprint);
        assert_eq!(state.scroll_resets(), 2);
    }

    #[test]
    fn modal_open_and_close() {
        let mut state = ViewState::new();
        state.select_page(PageId::DocumentManagement);
        state.open_contact_modal();
        assert!(state.contact_modal_open());
        assert_eq!(state.current_page(), PageId::DocumentManagement);
        state.close_contact_modal();
        assert!(!state.contact_modal_open());
    }

    #[test]
    fn selecting_same_page_twice_is_idempotent() {
        let mut once = ViewState::new();
        once.select_page(PageId::AboutUs);

        let mut twice = ViewState::new();
        twice.open_contact_modal();
        twice.select_page(PageId::AboutUs);
        twice.select_page(PageId::AboutUs);

        assert_eq!(once.current_page(), twice.current_page());
        assert_eq!(once.contact_modal_open(), twice.contact_modal_open());
        assert_eq!(twice.current_page(), PageId::AboutUs);
        assert!(!twice.contact_modal_open());
    }

    #[test]
    fn slugs_round_trip() {
        for page in PageId::ALL {
            assert_eq!(page.slug().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn unknown_slug_is_invalid_state() {
        let mut state = ViewState::new();
        let err = state.select_slug("kontakt").unwrap_err();
        assert!(matches!(err, SiteError::InvalidState { ref page } if page == "kontakt"));
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(ViewState::new());
        let state = state.reduce(NavAction::OpenContactModal);
        assert!(state.contact_modal_open());
        let state = state.reduce(NavAction::SelectPage(PageId::PrivacyPolicy));
        assert_eq!(state.current_page(), PageId::PrivacyPolicy);
        assert!(!state.contact_modal_open());
    }
}
