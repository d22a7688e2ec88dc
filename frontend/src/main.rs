use log::{info, Level};
use yew::prelude::*;

mod analytics;
mod config;
mod components {
    pub mod nav;
    pub mod toast;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod pricing;
}
mod deck;
mod lead;

use components::nav::Nav;
use components::toast::ToastProvider;
use config::StoreConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: Option<StoreConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    use_effect_with_deps(
        |_| {
            analytics::track_empty(analytics::Event::PageLoaded);
            || ()
        },
        (),
    );

    html! {
        <ToastProvider>
            <Nav />
            <Landing store={props.store.clone()} />
        </ToastProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    let store = config::load_store_config();
    yew::Renderer::<App>::with_props(AppProps { store }).render();
}
