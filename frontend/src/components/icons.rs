use yew::prelude::*;

use crate::content::ToolIcon;

fn stroke_icon(class: &'static str, paths: &[&'static str]) -> Html {
    html! {
        <svg class={class} fill="none" stroke="currentColor" viewBox="0 0 24 24">
            { for paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
            }) }
        </svg>
    }
}

pub fn tool_icon(icon: ToolIcon) -> Html {
    let paths: &[&'static str] = match icon {
        ToolIcon::Document => &[
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            "M21 21l-6-6",
        ],
        ToolIcon::Calculator => &[
            "M11 4H4a2 2 0 00-2 2v14a2 2 0 002 2h14a2 2 0 002-2v-7",
            "M18.5 2.5a2.121 2.121 0 013 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        ToolIcon::Home => &[
            "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
        ],
        ToolIcon::Media => &[
            "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
            "M15 10l-3 3m0 0l-3-3m3 3V4",
        ],
    };
    stroke_icon("icon", paths)
}

pub fn arrow_left() -> Html {
    stroke_icon("icon-sm", &["M10 19l-7-7m0 0l7-7m-7 7h18"])
}

pub fn arrow_right() -> Html {
    stroke_icon("icon-xs", &["M14 5l7 7m0 0l-7 7m7-7H3"])
}

pub fn external_link() -> Html {
    stroke_icon(
        "icon-xs",
        &["M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"],
    )
}

pub fn close() -> Html {
    stroke_icon("icon", &["M6 18L18 6M6 6l12 12"])
}

pub fn chat() -> Html {
    stroke_icon(
        "icon-sm",
        &["M8 10h.01M12 10h.01M16 10h.01M9 16H5a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v8a2 2 0 01-2 2h-5l-5 5v-5z"],
    )
}

pub fn warning() -> Html {
    stroke_icon(
        "icon",
        &["M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"],
    )
}

pub fn lock() -> Html {
    stroke_icon(
        "icon-lg",
        &["M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"],
    )
}
