use yew::prelude::*;

use crate::components::icons;
use crate::render::ContactOverlay;

#[derive(Properties, PartialEq)]
pub struct ContactOverlayProps {
    pub overlay: ContactOverlay,
    pub on_close: Callback<()>,
}

/// Full-screen overlay embedding the external contact form.
#[function_component(ContactOverlayView)]
pub fn contact_overlay_view(props: &ContactOverlayProps) -> Html {
    let ContactOverlayProps { overlay, on_close } = props;
    let close_backdrop = on_close.reform(|_: MouseEvent| ());
    let close_button = on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="overlay">
            <div class="overlay-backdrop" onclick={close_backdrop}></div>
            <div class="overlay-panel">
                <div class="overlay-header">
                    <h2>
                        <span class="overlay-badge">{ icons::chat() }</span>
                        { overlay.title }
                    </h2>
                    <button class="overlay-close" onclick={close_button}>{ icons::close() }</button>
                </div>
                <div class="overlay-frame">
                    <iframe src={overlay.url} title={overlay.title}></iframe>
                </div>
            </div>
            <style>
                {r#"
                .overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2.5rem;
                }
                .overlay-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(2, 6, 23, 0.9);
                    backdrop-filter: blur(24px);
                }
                .overlay-panel {
                    position: relative;
                    width: 75%;
                    height: 75%;
                    max-width: 56rem;
                    display: flex;
                    flex-direction: column;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 2.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .overlay-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                    border-bottom: 1px solid #1e293b;
                }
                .overlay-header h2 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .overlay-badge {
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #60a5fa;
                    background: rgba(37, 99, 235, 0.2);
                    border-radius: 0.5rem;
                }
                .overlay-close {
                    padding: 0.5rem;
                    color: #94a3b8;
                    background: none;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .overlay-close:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                }
                .overlay-frame {
                    flex: 1;
                    background: #fff;
                }
                .overlay-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: none;
                }
                "#}
            </style>
        </div>
    }
}
