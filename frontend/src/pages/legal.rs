use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::content::LegalDocument;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: LegalDocument,
    pub on_home: Callback<()>,
}

/// Imprint and privacy policy share this layout.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let LegalPageProps { document, on_home } = props;

    html! {
        <div class="subpage narrow">
            <BackLink on_home={on_home.clone()} />
            <h1>{ &document.title }</h1>
            <div class="legal-sections">
                { for document.sections.iter().map(|section| html! {
                    <section>
                        <h2>{ &section.heading }</h2>
                        {
                            if let Some(subheading) = &section.subheading {
                                html! { <h3>{ subheading }</h3> }
                            } else {
                                html! {}
                            }
                        }
                        <p>
                            { for section.lines.iter().enumerate().map(|(idx, line)| html! {
                                <>
                                    if idx > 0 { <br /> }
                                    { line }
                                </>
                            }) }
                        </p>
                    </section>
                }) }
            </div>
            <style>
                {r#"
                .legal-sections {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                }
                .legal-sections h2 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .legal-sections h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #f1f5f9;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
