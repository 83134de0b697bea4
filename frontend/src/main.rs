use std::rc::Rc;

use kiefer_frontend::config;
use kiefer_frontend::content::StaticContentStore;
use kiefer_frontend::{App, AppProps};
use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = StaticContentStore::bundled().unwrap_or_else(|e| {
        error!("{}", e);
        StaticContentStore::default()
    });

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
