use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod quiz {
    pub mod bmi;
    pub mod funnel;
    pub mod scoring;
    pub mod session;
    pub mod steps;
}
mod components {
    pub mod bmi_calculator;
    pub mod error_card;
    pub mod quiz_display;
    pub mod results_display;
}
mod pages {
    pub mod home;
    pub mod quiz;
    pub mod results;
}

use pages::home::Home;
use pages::quiz::QuizPage;
use pages::results::ResultsPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/quiz")]
    Quiz,
    #[at("/results")]
    Results,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Home /> }
        }
        Route::Quiz => {
            info!("Rendering quiz page");
            html! { <QuizPage /> }
        }
        Route::Results => {
            info!("Rendering results page");
            html! { <ResultsPage /> }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
