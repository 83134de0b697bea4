use yew::prelude::*;

use crate::render::HeroView;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroView,
    pub on_open_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { hero, on_open_contact } = props;
    let onclick = on_open_contact.reform(|_: MouseEvent| ());
    let background = format!("background-image: url('{}');", hero.image_url);
    // Firm names are written "A & B"; the ampersand gets the accent color.
    let name = match hero.name.split_once('&') {
        Some((first, rest)) => html! {
            <>{ first.trim_end() }{" "}<span class="accent">{"&"}</span>{" "}{ rest.trim_start() }</>
        },
        None => html! { <>{ &hero.name }</> },
    };

    html! {
        <section class="hero">
            <div class="hero-background" style={background}></div>
            <div class="hero-shade"></div>
            <div class="hero-content">
                <h1>{ name }</h1>
                <h2>{ &hero.tagline }</h2>
                <h3>{ &hero.appointment }</h3>
                <div class="hero-actions">
                    <button class="hero-cta" {onclick}>{"Kontakt"}</button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    filter: grayscale(1) brightness(0.5);
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(2, 6, 23, 0.4);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    margin-bottom: 1rem;
                }
                .hero h1 .accent {
                    color: #3b82f6;
                }
                .hero h2 {
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    color: #60a5fa;
                }
                .hero h3 {
                    font-size: clamp(0.875rem, 2vw, 1.25rem);
                    font-weight: 300;
                    color: #94a3b8;
                    max-width: 42rem;
                    margin: 1rem auto 0;
                }
                .hero-actions {
                    padding-top: 2.5rem;
                }
                .hero-cta {
                    padding: 2rem 5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                    background: linear-gradient(to right, #2563eb, #4f46e5);
                    border: none;
                    border-radius: 9999px;
                    box-shadow: 0 0 50px rgba(59, 130, 246, 0.4);
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
