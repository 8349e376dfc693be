use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Hero landing page: specialist photo, urgency copy and the single
/// call to action into the quiz.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="landing">
            <div class="landing-content">
                <img
                    class="landing-hero-image"
                    src="https://i.postimg.cc/3xYYXWFJ/Screenshot-1.png"
                    alt="Especialista em saúde"
                />
                <div class="landing-promise">
                    <p>
                        {"Você está a "}<strong>{"2 minutos"}</strong>
                        {" de descobrir por que o seu corpo se recusa a emagrecer e como usar o "}
                        <strong>{"Mounjaro de Pobre"}</strong>
                        {" que queima gordura 24 horas por dia "}
                        <strong>{"(sem academia e sem dietas malucas)"}</strong>{"."}
                    </p>
                </div>
                <Link<Route> to={Route::Quiz} classes="landing-cta-button">
                    {"Pegar Minha Receita"}
                </Link<Route>>
                <div class="landing-scarcity">
                    <p>
                        <strong class="landing-warning">{"Atenção:"}</strong>
                        {" oferecemos apenas "}<strong>{"uma consulta por pessoa"}</strong>{"."}
                    </p>
                    <p class="landing-scarcity-small">{"Se você sair, perderá a sua vez."}</p>
                </div>
            </div>
        </main>
    }
}
