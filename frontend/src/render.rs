//! Maps the current view state onto the content tree the components draw.

use crate::config;
use crate::content::{
    Credentials, DocumentTransfer, ExpertiseField, ExpertiseItem, FooterLink, LegalDocument,
    Qualification, StaticContentStore, TeamMember, ToolIcon,
};
use crate::nav::{PageId, ViewState};
use crate::popup::PopupRequest;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPage {
    pub page: PageId,
    pub body: PageBody,
    /// Present while the contact overlay is open, drawn above `body`.
    pub contact_overlay: Option<ContactOverlay>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageBody {
    Home(HomeView),
    Legal(LegalDocument),
    AboutUs(AboutView),
    DocumentManagement(DocumentView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactOverlay {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub name: String,
    pub tagline: String,
    pub appointment: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub hero: HeroView,
    pub services: Vec<ServiceCard>,
    pub tools: Vec<ToolCard>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    /// Popup for the "Info" button; `None` renders the button disabled.
    pub details: Option<PopupRequest>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolCard {
    pub title: String,
    pub icon: ToolIcon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutView {
    pub title: String,
    pub subtitle: String,
    pub team: Vec<TeamCard>,
    pub expertise: Vec<ExpertiseCard>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamCard {
    pub name: String,
    pub suffix: Option<String>,
    pub image_url: String,
    pub linkedin_url: Option<String>,
    /// Odd rows put the portrait on the right.
    pub mirrored: bool,
    pub credentials: CredentialsBlock,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CredentialsBlock {
    Text(String),
    Tiles(Vec<Qualification>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpertiseCard {
    pub title: String,
    pub body: ExpertiseBody,
    pub highlight: bool,
    pub footer_link: Option<FooterLink>,
    pub cta: Option<Cta>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpertiseBody {
    Items(Vec<ExpertiseItem>),
    Paragraphs(Vec<Paragraph>),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub lead: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cta {
    pub image_url: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentView {
    pub content: DocumentTransfer,
    pub upload: PopupRequest,
}

pub fn render(view: &ViewState, content: &StaticContentStore) -> RenderedPage {
    let page = view.current_page();
    let body = match page {
        PageId::Home => PageBody::Home(home(content)),
        PageId::Imprint => PageBody::Legal(content.imprint.clone()),
        PageId::PrivacyPolicy => PageBody::Legal(content.privacy_policy.clone()),
        PageId::AboutUs => PageBody::AboutUs(about(content)),
        PageId::DocumentManagement => PageBody::DocumentManagement(DocumentView {
            content: content.document_transfer.clone(),
            upload: upload_request(),
        }),
    };
    let contact_overlay = view.contact_modal_open().then_some(ContactOverlay {
        title: config::CONTACT_OVERLAY_TITLE,
        url: config::CONTACT_FORM_URL,
    });
    RenderedPage {
        page,
        body,
        contact_overlay,
    }
}

pub fn upload_request() -> PopupRequest {
    PopupRequest::new(
        config::UPLOAD_PORTAL_URL,
        config::UPLOAD_WINDOW_NAME,
        config::UPLOAD_POPUP,
    )
}

fn home(content: &StaticContentStore) -> HomeView {
    let firm = &content.firm;
    HomeView {
        hero: HeroView {
            name: firm.name.clone(),
            tagline: firm.tagline.clone(),
            appointment: firm.appointment.clone(),
            image_url: firm.hero_image_url.clone(),
        },
        services: content
            .services
            .iter()
            .map(|service| ServiceCard {
                title: service.title.clone(),
                details: service.details_url.as_ref().map(|url| {
                    PopupRequest::new(url.as_str(), config::DETAILS_WINDOW_NAME, config::DETAILS_POPUP)
                }),
            })
            .collect(),
        tools: content
            .tools
            .iter()
            .map(|tool| ToolCard {
                title: tool.title.clone(),
                icon: tool.icon,
            })
            .collect(),
    }
}

fn about(content: &StaticContentStore) -> AboutView {
    AboutView {
        title: content.about.title.clone(),
        subtitle: content.about.subtitle.clone(),
        team: content
            .team
            .iter()
            .enumerate()
            .map(|(idx, member)| team_card(idx, member))
            .collect(),
        expertise: content.expertise.iter().map(expertise_card).collect(),
    }
}

fn team_card(idx: usize, member: &TeamMember) -> TeamCard {
    let credentials = match &member.credentials {
        Credentials::Text(text) => CredentialsBlock::Text(text.clone()),
        Credentials::Structured(list) => CredentialsBlock::Tiles(list.clone()),
    };
    TeamCard {
        name: member.name.clone(),
        suffix: member.suffix.clone(),
        image_url: member.image_url.clone(),
        linkedin_url: member.linkedin_url.clone(),
        mirrored: idx % 2 == 1,
        credentials,
    }
}

fn expertise_card(field: &ExpertiseField) -> ExpertiseCard {
    let body = match (&field.items, &field.text) {
        (Some(items), _) => ExpertiseBody::Items(items.clone()),
        (None, Some(text)) => ExpertiseBody::Paragraphs(
            text.split("\n\n")
                .enumerate()
                .map(|(idx, paragraph)| Paragraph {
                    text: paragraph.to_string(),
                    lead: field.is_highlight && idx == 0,
                })
                .collect(),
        ),
        (None, None) => ExpertiseBody::Empty,
    };
    let cta = match (&field.cta_image, &field.cta_link) {
        (Some(image_url), Some(link)) => Some(Cta {
            image_url: image_url.clone(),
            link: link.clone(),
        }),
        _ => None,
    };
    ExpertiseCard {
        title: field.title.clone(),
        body,
        highlight: field.is_highlight,
        footer_link: field.footer_link.clone(),
        cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ServiceEntry, ToolEntry};
    use crate::popup::SizePolicy;
    use pretty_assertions::assert_eq;

    fn state_on(page: PageId) -> ViewState {
        let mut state = ViewState::new();
        state.select_page(page);
        state
    }

    fn member(name: &str, credentials: Credentials) -> TeamMember {
        TeamMember {
            name: name.into(),
            suffix: None,
            credentials,
            image_url: format!("{name}.jpg"),
            linkedin_url: None,
        }
    }

    fn field(title: &str) -> ExpertiseField {
        ExpertiseField {
            title: title.into(),
            text: None,
            items: None,
            is_highlight: false,
            footer_link: None,
            cta_image: None,
            cta_link: None,
        }
    }

    #[test]
    fn home_maps_services_and_tools_in_order() {
        let content = StaticContentStore {
            services: vec![
                ServiceEntry { title: "Erbschaft".into(), details_url: None },
                ServiceEntry { title: "Finanzamt".into(), details_url: Some("https://video.example".into()) },
                ServiceEntry { title: "Scheidung".into(), details_url: None },
            ],
            tools: vec![
                ToolEntry { title: "Check".into(), icon: ToolIcon::Document },
                ToolEntry { title: "Rechner".into(), icon: ToolIcon::Calculator },
            ],
            ..Default::default()
        };
        let rendered = render(&ViewState::new(), &content);
        let PageBody::Home(home) = rendered.body else {
            panic!("expected home page");
        };
        let titles: Vec<&str> = home.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Erbschaft", "Finanzamt", "Scheidung"]);
        let tools: Vec<&str> = home.tools.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(tools, vec!["Check", "Rechner"]);
        assert_eq!(home.services[0].details, None);
        assert_eq!(
            home.services[1].details,
            Some(PopupRequest::new("https://video.example", "ServiceDetails", SizePolicy::ScreenFraction(0.25)))
        );
    }

    #[test]
    fn empty_home_renders_no_cards() {
        let rendered = render(&ViewState::new(), &StaticContentStore::default());
        assert!(matches!(
            rendered.body,
            PageBody::Home(HomeView { ref services, ref tools, .. }) if services.is_empty() && tools.is_empty()
        ));
    }

    #[test]
    fn credentials_render_as_tiles_or_text() {
        let degrees = vec![
            Qualification { institution: "HWZ".into(), degree: "MREM".into() },
            Qualification { institution: "DIA".into(), degree: "Dipl. SV".into() },
            Qualification { institution: "EBS".into(), degree: "Immobilienökonom".into() },
        ];
        let content = StaticContentStore {
            team: vec![
                member("kiefer", Credentials::Structured(degrees.clone())),
                member("team", Credentials::Text("Erfahrene Gutachter.".into())),
            ],
            ..Default::default()
        };
        let rendered = render(&state_on(PageId::AboutUs), &content);
        let PageBody::AboutUs(about) = rendered.body else {
            panic!("expected about page");
        };
        assert_eq!(about.team[0].credentials, CredentialsBlock::Tiles(degrees));
        assert_eq!(
            about.team[1].credentials,
            CredentialsBlock::Text("Erfahrene Gutachter.".into())
        );
        assert!(!about.team[0].mirrored);
        assert!(about.team[1].mirrored);
    }

    #[test]
    fn expertise_items_take_precedence_over_text() {
        let mut both = field("Mitgliedschaften");
        both.text = Some("ignored".into());
        both.items = Some(vec![ExpertiseItem { text: "LVS Bayern".into(), link: Some("https://lvs.example".into()) }]);
        let card = expertise_card(&both);
        assert!(matches!(card.body, ExpertiseBody::Items(ref items) if items.len() == 1));
    }

    #[test]
    fn expertise_text_splits_into_paragraphs_with_lead() {
        let mut highlighted = field("Weiterbildung");
        highlighted.is_highlight = true;
        highlighted.text = Some("Lead\n\nZwei\n\nDrei".into());
        highlighted.footer_link = Some(FooterLink { text: "Wir bilden aus".into(), url: "https://ausbildung.example".into() });

        let card = expertise_card(&highlighted);
        assert!(card.highlight);
        assert_eq!(
            card.body,
            ExpertiseBody::Paragraphs(vec![
                Paragraph { text: "Lead".into(), lead: true },
                Paragraph { text: "Zwei".into(), lead: false },
                Paragraph { text: "Drei".into(), lead: false },
            ])
        );
        assert!(card.footer_link.is_some());
        assert!(card.cta.is_none());
    }

    #[test]
    fn plain_text_has_no_lead_paragraph() {
        let mut plain = field("Bestellung");
        plain.text = Some("Eins\n\nZwei".into());
        let ExpertiseBody::Paragraphs(paragraphs) = expertise_card(&plain).body else {
            panic!("expected paragraphs");
        };
        assert!(paragraphs.iter().all(|p| !p.lead));
    }

    #[test]
    fn cta_needs_both_image_and_link() {
        let mut image_only = field("Siegel");
        image_only.cta_image = Some("siegel.png".into());
        assert_eq!(expertise_card(&image_only).cta, None);

        image_only.cta_link = Some("https://ihk.example".into());
        assert_eq!(
            expertise_card(&image_only).cta,
            Some(Cta { image_url: "siegel.png".into(), link: "https://ihk.example".into() })
        );
        assert_eq!(expertise_card(&field("Leer")).body, ExpertiseBody::Empty);
    }

    #[test]
    fn legal_pages_use_their_documents() {
        let content = StaticContentStore {
            imprint: LegalDocument { title: "Impressum".into(), sections: vec![] },
            privacy_policy: LegalDocument { title: "Datenschutz".into(), sections: vec![] },
            ..Default::default()
        };
        let imprint = render(&state_on(PageId::Imprint), &content);
        let privacy = render(&state_on(PageId::PrivacyPolicy), &content);
        assert_eq!(imprint.body, PageBody::Legal(content.imprint.clone()));
        assert_eq!(privacy.body, PageBody::Legal(content.privacy_policy.clone()));
    }

    #[test]
    fn document_management_offers_fixed_upload_popup() {
        let rendered = render(&state_on(PageId::DocumentManagement), &StaticContentStore::default());
        let PageBody::DocumentManagement(documents) = rendered.body else {
            panic!("expected document page");
        };
        assert_eq!(documents.upload.target_url, config::UPLOAD_PORTAL_URL);
        assert_eq!(
            documents.upload.size_policy,
            SizePolicy::FixedPixels { width: 1024.0, height: 768.0 }
        );
    }

    #[test]
    fn overlay_is_composed_over_any_page() {
        let content = StaticContentStore::default();
        for page in PageId::ALL {
            let mut state = state_on(page);
            assert_eq!(render(&state, &content).contact_overlay, None);
            state.open_contact_modal();
            let rendered = render(&state, &content);
            assert_eq!(rendered.page, page);
            assert_eq!(
                rendered.contact_overlay,
                Some(ContactOverlay { title: "Kontaktanfrage", url: config::CONTACT_FORM_URL })
            );
        }
    }
}
