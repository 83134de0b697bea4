use yew::prelude::*;

use crate::components::icons;
use crate::popup;
use crate::render::{ServiceCard, ToolCard};

#[derive(Properties, PartialEq)]
pub struct ServiceTileProps {
    pub card: ServiceCard,
    pub on_inquire: Callback<()>,
}

#[function_component(ServiceTile)]
pub fn service_tile(props: &ServiceTileProps) -> Html {
    let ServiceTileProps { card, on_inquire } = props;

    let info_button = match &card.details {
        Some(request) => {
            let request = request.clone();
            let onclick = Callback::from(move |_: MouseEvent| popup::open_popup(&request));
            html! { <button class="service-info" {onclick}>{"Info"}</button> }
        }
        None => html! { <button class="service-info disabled" disabled={true}>{"Info"}</button> },
    };
    let onclick = on_inquire.reform(|_: MouseEvent| ());

    html! {
        <div class="service-card">
            <div class="service-glow"></div>
            <div class="service-body">
                <div class="service-label">
                    <div class="service-line"></div>
                    <span>{"Expertise"}</span>
                </div>
                <h4>{ &card.title }</h4>
                <div class="service-actions">
                    { info_button }
                    <button class="service-inquire" {onclick}>{"Anfragen"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolTileProps {
    pub card: ToolCard,
}

#[function_component(ToolTile)]
pub fn tool_tile(props: &ToolTileProps) -> Html {
    html! {
        <div class="tool-card">
            <div class="tool-icon">{ icons::tool_icon(props.card.icon) }</div>
            <h4>{ &props.card.title }</h4>
            <div class="tool-actions">
                <button class="tool-more">{"Mehr erfahren"}</button>
                <button class="tool-open">{"Zum Tool"}</button>
            </div>
        </div>
    }
}

/// Shared card styles, mounted once by the home page.
pub fn card_styles() -> Html {
    html! {
        <style>
            {r#"
            .service-card {
                position: relative;
                display: flex;
                flex-direction: column;
                height: 100%;
                padding: 2.25rem;
                background: rgba(15, 23, 42, 0.3);
                border: 1px solid rgba(30, 41, 59, 0.5);
                border-radius: 2rem;
                backdrop-filter: blur(12px);
                overflow: hidden;
                transition: all 0.5s ease;
            }
            .service-card:hover {
                border-color: rgba(59, 130, 246, 0.5);
                transform: translateY(-0.5rem);
            }
            .service-glow {
                position: absolute;
                top: -6rem;
                right: -6rem;
                width: 12rem;
                height: 12rem;
                background: rgba(37, 99, 235, 0.05);
                filter: blur(80px);
                border-radius: 9999px;
            }
            .service-body {
                position: relative;
                z-index: 10;
                display: flex;
                flex-direction: column;
                height: 100%;
            }
            .service-label {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                margin-bottom: 2rem;
                font-size: 10px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.2em;
                color: rgba(59, 130, 246, 0.8);
            }
            .service-line {
                width: 2.5rem;
                height: 2px;
                background: linear-gradient(to right, #3b82f6, #6366f1);
            }
            .service-card h4 {
                font-size: 1.5rem;
                font-weight: 700;
                line-height: 1.3;
                margin-bottom: 2.5rem;
                hyphens: auto;
                word-break: break-word;
            }
            .service-actions, .tool-actions {
                margin-top: auto;
                display: flex;
                gap: 0.75rem;
            }
            .service-actions {
                padding-top: 1.5rem;
                border-top: 1px solid rgba(30, 41, 59, 0.5);
            }
            .service-actions button, .tool-actions button {
                flex: 1;
                padding: 0.75rem 1rem;
                font-size: 11px;
                font-weight: 700;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                color: #fff;
                border-radius: 0.75rem;
                cursor: pointer;
            }
            .service-info {
                background: rgba(255, 255, 255, 0.15);
                border: 1px solid rgba(255, 255, 255, 0.05);
            }
            .service-info.disabled {
                background: rgba(255, 255, 255, 0.05);
                color: #64748b;
                cursor: not-allowed;
                opacity: 0.4;
            }
            .service-inquire {
                background: linear-gradient(to right, #2563eb, #4338ca);
                border: none;
            }
            .tool-card {
                display: flex;
                flex-direction: column;
                height: 100%;
                padding: 2rem;
                background: linear-gradient(to bottom right, #0f172a, #020617);
                border: 1px solid #1e293b;
                border-radius: 1.5rem;
                transition: all 0.3s ease;
            }
            .tool-card:hover {
                border-color: rgba(14, 165, 233, 0.3);
                box-shadow: 0 0 30px rgba(56, 189, 248, 0.15);
            }
            .tool-icon {
                width: 3rem;
                height: 3rem;
                display: flex;
                align-items: center;
                justify-content: center;
                margin-bottom: 1.5rem;
                color: #38bdf8;
                background: rgba(2, 132, 199, 0.1);
                border: 1px solid rgba(14, 165, 233, 0.2);
                border-radius: 1rem;
            }
            .tool-card h4 {
                font-size: 1.125rem;
                font-weight: 700;
                margin-bottom: 1.5rem;
                white-space: pre-line;
            }
            .tool-actions {
                flex-direction: column;
            }
            .tool-more {
                background: rgba(2, 132, 199, 0.1);
                border: 1px solid rgba(14, 165, 233, 0.2);
            }
            .tool-open {
                background: linear-gradient(to right, #38bdf8, #2563eb);
                border: none;
            }
            "#}
        </style>
    }
}
