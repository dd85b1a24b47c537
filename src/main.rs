use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod hooks;

/// DOM-free cores of every page behaviour. `hooks` and `components` sample
/// the page, call into these, and write the results back.
mod effects {
    pub mod anchor;
    pub mod booking;
    pub mod menu;
    pub mod phone;
    pub mod reveal;
    pub mod scroll;
    pub mod tracking;
    pub mod validation;
}

mod components {
    pub mod booking_form;
    pub mod nav;
    pub mod scroll_progress;
    pub mod scroll_to_top;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SparkleClean site");
    yew::Renderer::<App>::new().render();
}
