// frontend_movie_stream/src/router.rs
use crate::components::auth_guard::AuthGuard;
use crate::components::header::Header;
use crate::pages::home::Home;
use crate::pages::login::Login;
use crate::pages::recommended::Recommended;
use crate::pages::register::Register;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/recommended")]
    Recommended,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Register => html! { <Register /> },
        Route::Login => html! { <Login /> },
        Route::Recommended => html! {
            <AuthGuard>
                <Recommended />
            </AuthGuard>
        },
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}
