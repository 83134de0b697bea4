pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod popup;
pub mod render;

pub mod components {
    pub mod back_link;
    pub mod cards;
    pub mod contact_overlay;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
}
pub mod pages {
    pub mod about;
    pub mod documents;
    pub mod home;
    pub mod legal;
}

mod app;

pub use app::{App, AppProps};
