use yew::prelude::*;

use crate::components::cards::{card_styles, ServiceTile, ToolTile};
use crate::components::hero::Hero;
use crate::render::HomeView;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub view: HomeView,
    pub on_open_contact: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let HomePageProps { view, on_open_contact } = props;

    html! {
        <>
            <Hero hero={view.hero.clone()} on_open_contact={on_open_contact.clone()} />

            // Services
            <section class="home-section">
                <div class="section-heading">
                    <h2>{"Portfolio"}</h2>
                    <h3>{"Unsere Dienstleistungen"}</h3>
                    <div class="section-rule"></div>
                </div>
                <div class="services-grid">
                    { for view.services.iter().map(|card| html! {
                        <ServiceTile card={card.clone()} on_inquire={on_open_contact.clone()} />
                    }) }
                </div>
            </section>

            // Online tools
            <section class="home-section tools">
                <div class="section-heading">
                    <h2>{"Digital"}</h2>
                    <h3>{"Unsere Online-Tools"}</h3>
                    <div class="section-rule"></div>
                </div>
                <div class="tools-grid">
                    { for view.tools.iter().map(|card| html! { <ToolTile card={card.clone()} /> }) }
                </div>
            </section>

            { card_styles() }
            <style>
                {r#"
                .home-section {
                    padding: 8rem 1.5rem;
                    background: #020617;
                }
                .home-section.tools {
                    background: rgba(15, 23, 42, 0.2);
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .section-heading h2 {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #3b82f6;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    margin-bottom: 1.5rem;
                }
                .home-section.tools .section-heading h2 {
                    color: #38bdf8;
                }
                .section-heading h3 {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    font-weight: 800;
                    margin-bottom: 2rem;
                }
                .section-rule {
                    height: 6px;
                    width: 8rem;
                    margin: 0 auto;
                    background: linear-gradient(to right, #2563eb, #4f46e5);
                    border-radius: 9999px;
                }
                .services-grid, .tools-grid {
                    display: grid;
                    gap: 2.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .services-grid {
                    grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                }
                .tools-grid {
                    gap: 1.5rem;
                    grid-template-columns: repeat(auto-fill, minmax(15rem, 1fr));
                }
                "#}
            </style>
        </>
    }
}
