use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::icons;
use crate::render::{AboutView, CredentialsBlock, ExpertiseBody, ExpertiseCard, TeamCard};

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub view: AboutView,
    pub on_home: Callback<()>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let AboutPageProps { view, on_home } = props;

    html! {
        <div class="subpage wide">
            <BackLink on_home={on_home.clone()} />
            <div class="about-intro">
                <h1>{ &view.title }</h1>
                <p>{ &view.subtitle }</p>
            </div>

            <div class="team-list">
                { for view.team.iter().map(team_card) }
            </div>

            <div class="about-divider"></div>

            <div class="expertise-grid">
                { for view.expertise.iter().map(expertise_card) }
            </div>
            { about_styles() }
        </div>
    }
}

fn team_card(member: &TeamCard) -> Html {
    let row_class = classes!("team-card", member.mirrored.then_some("mirrored"));
    let credentials = match &member.credentials {
        CredentialsBlock::Tiles(qualifications) => html! {
            <div class="credential-tiles">
                { for qualifications.iter().map(|q| html! {
                    <div class="credential-tile">
                        <div class="credential-bar"></div>
                        <h5>{ &q.institution }</h5>
                        <p>{ &q.degree }</p>
                    </div>
                }) }
            </div>
        },
        CredentialsBlock::Text(text) => html! {
            <div class="credential-text">
                <p>{ text }</p>
            </div>
        },
    };

    html! {
        <div class={row_class}>
            <div class="team-portrait">
                <img src={member.image_url.clone()} alt={member.name.clone()} />
            </div>
            <div class="team-body">
                <div class="team-heading">
                    <h3>
                        { &member.name }
                        if let Some(suffix) = &member.suffix {
                            <span class="team-suffix">{ suffix }</span>
                        }
                    </h3>
                    if let Some(url) = &member.linkedin_url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="team-linkedin" title="LinkedIn Profil">
                            {"in"}
                        </a>
                    }
                </div>
                <h4 class="team-credentials-label">{"Qualifikationen"}</h4>
                { credentials }
            </div>
        </div>
    }
}

fn expertise_card(card: &ExpertiseCard) -> Html {
    let body = match &card.body {
        ExpertiseBody::Items(items) => html! {
            <div class="expertise-items">
                { for items.iter().map(|item| match &item.link {
                    Some(link) => html! {
                        <a class="expertise-item linked" href={link.clone()} target="_blank" rel="noopener noreferrer">
                            <div class="expertise-bar"></div>
                            <div>
                                <p>{ &item.text }</p>
                                <div class="expertise-visit">
                                    <span>{"Zur Website"}</span>
                                    { icons::arrow_right() }
                                </div>
                            </div>
                        </a>
                    },
                    None => html! {
                        <div class="expertise-item">
                            <div class="expertise-bar"></div>
                            <p>{ &item.text }</p>
                        </div>
                    },
                }) }
            </div>
        },
        ExpertiseBody::Paragraphs(paragraphs) => html! {
            <>
                { for paragraphs.iter().map(|paragraph| html! {
                    <p class={classes!("expertise-paragraph", paragraph.lead.then_some("lead"))}>
                        { &paragraph.text }
                    </p>
                }) }
            </>
        },
        ExpertiseBody::Empty => html! {},
    };

    html! {
        <div class={classes!("expertise-card", card.highlight.then_some("highlight"))}>
            if card.highlight {
                <div class="expertise-badge">{"Qualitätsgarantie"}</div>
            }
            <h3>{ &card.title }</h3>
            <div class="expertise-panel">
                <div class="expertise-content">{ body }</div>
                if let Some(footer) = &card.footer_link {
                    <div class="expertise-footer">
                        <a href={footer.url.clone()} target="_blank" rel="noopener noreferrer">
                            { &footer.text }
                            { icons::arrow_right() }
                        </a>
                    </div>
                }
                if let Some(cta) = &card.cta {
                    <div class="expertise-cta">
                        <a href={cta.link.clone()} target="_blank" rel="noopener noreferrer">
                            <img src={cta.image_url.clone()} alt="IHK Siegel" />
                        </a>
                    </div>
                }
            </div>
        </div>
    }
}

fn about_styles() -> Html {
    html! {
        <style>
            {r#"
            .about-intro {
                text-align: center;
                margin-bottom: 4rem;
            }
            .about-intro p {
                color: #94a3b8;
                max-width: 42rem;
                margin: 0 auto;
                font-size: 1.125rem;
            }
            .team-list {
                display: flex;
                flex-direction: column;
                gap: 6rem;
                margin-bottom: 6rem;
            }
            .team-card {
                display: flex;
                background: rgba(15, 23, 42, 0.4);
                border: 1px solid rgba(30, 41, 59, 0.6);
                border-radius: 3rem;
                overflow: hidden;
            }
            .team-card.mirrored {
                flex-direction: row-reverse;
            }
            .team-portrait {
                position: relative;
                width: 33%;
                min-height: 400px;
            }
            .team-portrait img {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
                filter: grayscale(1);
                transition: filter 0.7s ease, transform 0.7s ease;
            }
            .team-portrait img:hover {
                filter: none;
                transform: scale(1.1);
            }
            .team-body {
                width: 67%;
                padding: 4rem;
            }
            .team-heading {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 1.5rem;
                margin-bottom: 2rem;
            }
            .team-heading h3 {
                font-size: 3rem;
                font-weight: 700;
                display: flex;
                align-items: baseline;
                gap: 0.75rem;
            }
            .team-suffix {
                font-size: 0.4em;
                color: rgba(96, 165, 250, 0.8);
                padding: 0.25rem 0.75rem;
                background: rgba(59, 130, 246, 0.1);
                border: 1px solid rgba(59, 130, 246, 0.2);
                border-radius: 9999px;
            }
            .team-linkedin {
                width: 3rem;
                height: 3rem;
                display: flex;
                align-items: center;
                justify-content: center;
                font-weight: 700;
                color: #0077b5;
                background: rgba(0, 119, 181, 0.1);
                border: 1px solid rgba(0, 119, 181, 0.3);
                border-radius: 0.75rem;
                text-decoration: none;
            }
            .team-credentials-label {
                font-size: 0.75rem;
                font-weight: 700;
                color: #3b82f6;
                text-transform: uppercase;
                letter-spacing: 0.3em;
                margin-bottom: 2rem;
            }
            .credential-tiles {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
                gap: 1rem;
            }
            .credential-tile {
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
                padding: 1.5rem;
                background: rgba(2, 6, 23, 0.8);
                border: 1px solid #1e293b;
                border-radius: 1rem;
            }
            .credential-bar {
                width: 1.5rem;
                height: 0.25rem;
                background: #2563eb;
                border-radius: 9999px;
            }
            .credential-tile h5 {
                font-size: 0.875rem;
                font-weight: 700;
            }
            .credential-tile p, .credential-text p {
                color: #94a3b8;
                font-style: italic;
            }
            .credential-tile p {
                font-size: 0.75rem;
            }
            .credential-text {
                padding: 2rem;
                background: rgba(2, 6, 23, 0.6);
                border: 1px solid #1e293b;
                border-radius: 1.5rem;
                font-size: 1.125rem;
            }
            .about-divider {
                height: 1px;
                margin-bottom: 6rem;
                background: linear-gradient(to right, transparent, #1e293b, transparent);
            }
            .expertise-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr));
                gap: 2rem;
            }
            .expertise-card {
                position: relative;
                padding: 2.5rem;
                background: rgba(15, 23, 42, 0.3);
                border: 1px solid rgba(30, 41, 59, 0.6);
                border-radius: 1.5rem;
                overflow: hidden;
            }
            .expertise-card.highlight {
                border-color: rgba(30, 58, 138, 0.4);
                background: rgba(30, 58, 138, 0.05);
            }
            .expertise-badge {
                position: absolute;
                top: 1rem;
                right: 1rem;
                padding: 0.25rem 0.75rem;
                font-size: 10px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                color: #93c5fd;
                background: rgba(30, 58, 138, 0.4);
                border: 1px solid #1e40af;
                border-radius: 9999px;
            }
            .expertise-card h3 {
                font-size: 1.25rem;
                font-weight: 700;
                margin-bottom: 1.5rem;
            }
            .expertise-panel {
                display: flex;
                flex-direction: column;
                min-height: 500px;
                padding: 3rem;
                background: rgba(2, 6, 23, 0.5);
                border: 1px solid #1e293b;
                border-radius: 1rem;
            }
            .expertise-content {
                flex: 1;
            }
            .expertise-items {
                display: grid;
                gap: 1rem;
            }
            .expertise-item {
                display: flex;
                align-items: center;
                gap: 1.5rem;
                padding: 1.5rem;
                color: #cbd5e1;
                background: rgba(15, 23, 42, 0.4);
                border: 1px solid rgba(30, 41, 59, 0.6);
                border-radius: 1rem;
                text-decoration: none;
            }
            .expertise-item.linked:hover {
                color: #fff;
                border-color: rgba(59, 130, 246, 0.4);
            }
            .expertise-bar {
                width: 0.25rem;
                align-self: stretch;
                background: #1e3a8a;
                border-radius: 9999px;
            }
            .expertise-visit {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                margin-top: 0.5rem;
                font-size: 10px;
                font-weight: 700;
                text-transform: uppercase;
                color: #60a5fa;
            }
            .expertise-paragraph {
                color: #1e40af;
                font-style: italic;
                line-height: 1.6;
                margin-bottom: 1.5rem;
            }
            .expertise-paragraph.lead {
                color: #2563eb;
                font-style: normal;
                font-weight: 700;
                font-size: 1.25rem;
                padding-bottom: 1.5rem;
                border-bottom: 1px solid rgba(30, 58, 138, 0.2);
            }
            .expertise-footer, .expertise-cta {
                margin-top: 2rem;
                padding-top: 1.5rem;
                border-top: 1px solid rgba(30, 58, 138, 0.2);
            }
            .expertise-footer a {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                font-weight: 700;
                color: #60a5fa;
                text-decoration: none;
            }
            .expertise-cta {
                text-align: center;
            }
            .expertise-cta img {
                height: 8rem;
                padding: 1.75rem;
                background: #fff;
                border-radius: 1rem;
            }
            @media (max-width: 1024px) {
                .team-card, .team-card.mirrored {
                    flex-direction: column;
                }
                .team-portrait, .team-body {
                    width: 100%;
                }
                .team-body {
                    padding: 2rem;
                }
            }
            "#}
        </style>
    }
}
