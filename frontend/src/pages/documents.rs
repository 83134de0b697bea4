use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::icons;
use crate::popup;
use crate::render::DocumentView;

#[derive(Properties, PartialEq)]
pub struct DocumentPageProps {
    pub view: DocumentView,
    pub on_home: Callback<()>,
}

#[function_component(DocumentPage)]
pub fn document_page(props: &DocumentPageProps) -> Html {
    let DocumentPageProps { view, on_home } = props;
    let start_upload = {
        let request = view.upload.clone();
        Callback::from(move |_: MouseEvent| popup::open_popup(&request))
    };

    html! {
        <div class="subpage narrow">
            <BackLink on_home={on_home.clone()} />
            <h1>{ &view.content.title }</h1>
            <div class="transfer-body">
                <div class="transfer-warning">
                    <div class="transfer-warning-icon">{ icons::warning() }</div>
                    <p>{ &view.content.warning }</p>
                </div>

                { for view.content.paragraphs.iter().map(|paragraph| html! { <p>{ paragraph }</p> }) }

                <div class="transfer-cta">
                    <div class="transfer-lock">{ icons::lock() }</div>
                    <p>{ &view.content.call_to_action }</p>
                    <button class="transfer-start" onclick={start_upload}>
                        { &view.content.button_label }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .transfer-body {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                    color: #cbd5e1;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                .transfer-warning {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: rgba(69, 10, 10, 0.3);
                    border: 1px solid rgba(239, 68, 68, 0.5);
                    border-radius: 1rem;
                    box-shadow: 0 0 20px rgba(239, 68, 68, 0.1);
                }
                .transfer-warning-icon {
                    color: #ef4444;
                    margin-top: 0.25rem;
                }
                .transfer-warning p {
                    color: #f87171;
                    font-weight: 700;
                }
                .transfer-cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 2.5rem;
                    background: rgba(30, 58, 138, 0.2);
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    border-radius: 1.5rem;
                }
                .transfer-lock {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    color: #60a5fa;
                    background: rgba(59, 130, 246, 0.2);
                    border-radius: 1rem;
                }
                .transfer-cta p {
                    color: #f1f5f9;
                    margin-bottom: 2.5rem;
                }
                .transfer-start {
                    padding: 1.25rem 3rem;
                    font-weight: 700;
                    color: #fff;
                    background: linear-gradient(to right, #2563eb, #4f46e5);
                    border: none;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px rgba(30, 58, 138, 0.4);
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .transfer-start:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </div>
    }
}
