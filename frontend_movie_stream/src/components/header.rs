// frontend_movie_stream/src/components/header.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{context::use_auth, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth.sign_out();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <nav class="navbar navbar-dark bg-dark shadow-sm sticky-top">
            <div class="container">
                <span class="navbar-brand">{ "Movie Stream" }</span>
                <div class="me-auto">
                    <Link<Route> to={Route::Home} classes="nav-link">{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Recommended} classes="nav-link">{ "Recommended" }</Link<Route>>
                </div>
                <div class="ms-auto align-items-center">
                    if let Some(session) = auth.session() {
                        <span>{ "Hello, " }<strong>{ session.first_name }</strong></span>
                        <button class="btn btn-outline-light btn-sm" onclick={on_logout}>
                            { "Log Out" }
                        </button>
                    } else {
                        <button class="btn btn-outline-info btn-sm me-2" onclick={go_to(Route::Login)}>
                            { "Login" }
                        </button>
                        <button class="btn btn-info btn-sm" onclick={go_to(Route::Register)}>
                            { "Register" }
                        </button>
                    }
                </div>
            </div>
        </nav>
    }
}
