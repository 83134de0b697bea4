use yew::prelude::*;

use crate::components::icons;

#[derive(Properties, PartialEq)]
pub struct BackLinkProps {
    pub on_home: Callback<()>,
}

/// "Back to start page" button shown on every sub page.
#[function_component(BackLink)]
pub fn back_link(props: &BackLinkProps) -> Html {
    let onclick = props.on_home.reform(|_: MouseEvent| ());
    html! {
        <button class="back-link" {onclick}>
            { icons::arrow_left() }
            {"Zurück zur Startseite"}
        </button>
    }
}
