use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::contact_overlay::ContactOverlayView;
use crate::components::footer::Footer;
use crate::components::header::HeaderButtons;
use crate::content::StaticContentStore;
use crate::nav::{NavAction, PageId, ViewState};
use crate::pages::{about::AboutPage, documents::DocumentPage, home::HomePage, legal::LegalPage};
use crate::render::{render, PageBody};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<StaticContentStore>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let view = use_reducer(ViewState::new);

    // Jump back to the top whenever navigation asks for it.
    {
        let scroll_resets = view.scroll_resets();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            scroll_resets,
        );
    }

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |page: PageId| view.dispatch(NavAction::SelectPage(page)))
    };
    let on_home = on_navigate.reform(|_: ()| PageId::Home);
    let on_open_contact = {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(NavAction::OpenContactModal))
    };
    let on_close_contact = {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(NavAction::CloseContactModal))
    };

    let content = &props.content;
    let rendered = render(&view, content);

    let page = match rendered.body {
        PageBody::Home(home) => {
            info!("Rendering Home page");
            html! { <HomePage view={home} on_open_contact={on_open_contact.clone()} /> }
        }
        PageBody::Legal(document) => {
            info!("Rendering {:?} page", rendered.page);
            html! { <LegalPage document={document} on_home={on_home.clone()} /> }
        }
        PageBody::AboutUs(about) => {
            info!("Rendering AboutUs page");
            html! { <AboutPage view={about} on_home={on_home.clone()} /> }
        }
        PageBody::DocumentManagement(documents) => {
            info!("Rendering DocumentManagement page");
            html! { <DocumentPage view={documents} on_home={on_home.clone()} /> }
        }
    };

    html! {
        <div class="site">
            <HeaderButtons links={content.header_links.clone()} on_navigate={on_navigate.clone()} />
            { page }
            <Footer firm={content.firm.clone()} links={content.footer_links.clone()} on_navigate={on_navigate} />
            if let Some(overlay) = rendered.contact_overlay {
                <ContactOverlayView overlay={overlay} on_close={on_close_contact} />
            }
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #020617;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .site {
                    position: relative;
                    min-height: 100vh;
                }
                .subpage {
                    padding: 8rem 1.5rem 5rem;
                    margin: 0 auto;
                }
                .subpage.narrow {
                    max-width: 56rem;
                }
                .subpage.wide {
                    max-width: 80rem;
                }
                .subpage h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 800;
                    margin-bottom: 2.5rem;
                    text-shadow: 0 0 20px rgba(59, 130, 246, 0.5);
                }
                .back-link {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                    font-weight: 600;
                    color: #60a5fa;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }
                .back-link:hover {
                    color: #93c5fd;
                }
                .icon-xs { width: 1rem; height: 1rem; }
                .icon-sm { width: 1.25rem; height: 1.25rem; }
                .icon { width: 1.5rem; height: 1.5rem; }
                .icon-lg { width: 2rem; height: 2rem; }
                "#}
            </style>
        </div>
    }
}
