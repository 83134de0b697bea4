//! Site content, supplied as JSON and bundled into the binary.
//!
//! Nothing here is computed; the renderer only reads it.

use serde::Deserialize;

use crate::error::Result;
use crate::nav::PageId;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaticContentStore {
    pub firm: FirmInfo,
    pub header_links: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
    pub services: Vec<ServiceEntry>,
    pub tools: Vec<ToolEntry>,
    pub about: AboutIntro,
    pub team: Vec<TeamMember>,
    pub expertise: Vec<ExpertiseField>,
    pub document_transfer: DocumentTransfer,
    pub imprint: LegalDocument,
    pub privacy_policy: LegalDocument,
}

impl StaticContentStore {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FirmInfo {
    pub name: String,
    pub tagline: String,
    pub appointment: String,
    pub hero_image_url: String,
    pub address_lines: Vec<String>,
    pub directions_url: String,
    pub phone: String,
    pub email: String,
}

/// A button that switches to another page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: PageId,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    #[serde(default)]
    pub details_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolIcon {
    Document,
    Calculator,
    Home,
    Media,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ToolEntry {
    pub title: String,
    pub icon: ToolIcon,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutIntro {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Qualification {
    pub institution: String,
    pub degree: String,
}

/// Either a prose description or a list of formal qualifications.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Credentials {
    Text(String),
    Structured(Vec<Qualification>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    pub credentials: Credentials,
    pub image_url: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpertiseItem {
    pub text: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpertiseField {
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ExpertiseItem>>,
    #[serde(default)]
    pub is_highlight: bool,
    #[serde(default)]
    pub footer_link: Option<FooterLink>,
    #[serde(default)]
    pub cta_image: Option<String>,
    #[serde(default)]
    pub cta_link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentTransfer {
    pub title: String,
    pub warning: String,
    pub paragraphs: Vec<String>,
    pub call_to_action: String,
    pub button_label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegalDocument {
    pub title: String,
    pub sections: Vec<LegalSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegalSection {
    pub heading: String,
    pub subheading: Option<String>,
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_content_parses() {
        let content = StaticContentStore::bundled().unwrap();
        assert_eq!(content.services.len(), 12);
        assert_eq!(content.tools.len(), 4);
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.expertise.len(), 4);
        assert!(content.services[0].details_url.is_some());
        assert!(content.services[1..].iter().all(|s| s.details_url.is_none()));
    }

    #[test]
    fn bundled_links_target_known_pages() {
        let content = StaticContentStore::bundled().unwrap();
        let targets: Vec<PageId> = content
            .header_links
            .iter()
            .chain(&content.footer_links)
            .map(|link| link.target)
            .collect();
        assert_eq!(
            targets,
            vec![
                PageId::AboutUs,
                PageId::DocumentManagement,
                PageId::Imprint,
                PageId::PrivacyPolicy
            ]
        );
    }

    #[test]
    fn credentials_accept_text_or_list() {
        let raw = r#"{
            "team": [
                {
                    "name": "A",
                    "credentials": [{ "institution": "Uni", "degree": "MSc" }],
                    "image_url": "a.jpg"
                },
                { "name": "B", "credentials": "Lots of experience.", "image_url": "b.jpg" }
            ]
        }"#;
        let content = StaticContentStore::from_json(raw).unwrap();
        assert_eq!(
            content.team[0].credentials,
            Credentials::Structured(vec![Qualification {
                institution: "Uni".into(),
                degree: "MSc".into()
            }])
        );
        assert_eq!(
            content.team[1].credentials,
            Credentials::Text("Lots of experience.".into())
        );
    }

    #[test]
    fn unknown_link_target_is_rejected() {
        let raw = r#"{ "header_links": [{ "label": "Kontakt", "target": "kontakt" }] }"#;
        let err = StaticContentStore::from_json(raw).unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
        assert!(err.to_string().contains("unknown page 'kontakt'"));
    }
}
