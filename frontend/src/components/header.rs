use yew::prelude::*;

use crate::content::NavLink;
use crate::nav::PageId;

#[derive(Properties, PartialEq)]
pub struct HeaderButtonsProps {
    pub links: Vec<NavLink>,
    pub on_navigate: Callback<PageId>,
}

#[function_component(HeaderButtons)]
pub fn header_buttons(props: &HeaderButtonsProps) -> Html {
    html! {
        <div class="header-buttons">
            { for props.links.iter().enumerate().map(|(idx, link)| {
                let target = link.target;
                let onclick = props.on_navigate.reform(move |_: MouseEvent| target);
                // First button carries the accent color.
                let class = if idx == 0 { "header-button accent" } else { "header-button" };
                html! {
                    <button class={class} {onclick}>{ &link.label }</button>
                }
            }) }
            <style>
                {r#"
                .header-buttons {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    gap: 1rem;
                    z-index: 50;
                }
                .header-button {
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    backdrop-filter: blur(12px);
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .header-button:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .header-button.accent {
                    color: #7dd3fc;
                    background: rgba(14, 165, 233, 0.2);
                    border-color: rgba(56, 189, 248, 0.5);
                    box-shadow: 0 0 15px rgba(56, 189, 248, 0.2);
                }
                "#}
            </style>
        </div>
    }
}
