use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod accordion;
mod animation;
mod config;
mod contact;
mod dom;
mod form;
mod hooks;
mod scroll;
mod validation;
mod components {
    pub mod contact_form;
    pub mod demo_preview;
    pub mod faq;
    pub mod header;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting UGC Rights landing page");
    yew::Renderer::<App>::new().render();
}
