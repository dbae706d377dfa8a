use yew::prelude::*;
use web_sys::HtmlInputElement;
use yew_router::prelude::*;
use gloo::console::error;
use wasm_bindgen_futures::spawn_local;

use crate::{
    api::auth::{self, LoginRequest},
    context::{use_auth, use_public_client},
    router::Route,
};

const LOGIN_FAILED: &str = "Invalid email or password";

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let navigator = use_navigator();
    let auth = use_auth();
    let client = use_public_client();

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = LoginRequest {
                email: email.trim().to_owned(),
                password: (*password).clone(),
            };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let auth = auth.clone();
            let client = client.clone();

            spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match auth::login(&client, &credentials).await {
                    Ok(session) => {
                        auth.sign_in(session);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Recommended);
                        }
                    }
                    Err(err) => {
                        error!(format!("Login failed: {err}"));
                        error_message.set(Some(LOGIN_FAILED.to_owned()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let can_submit = !*is_loading && !email.trim().is_empty() && !password.is_empty();

    html! {
        <div class="login-container d-flex justify-content-center">
            <form class="login-card" {onsubmit}>
                <h1 class="mb-2">{ "Login" }</h1>

                if let Some(error) = (*error_message).as_ref() {
                    <div class="error-message mb-2">{ error }</div>
                }

                <input
                    class="form-control mb-2"
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email}
                    disabled={*is_loading}
                />
                <input
                    class="form-control mb-2"
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password}
                    disabled={*is_loading}
                />

                <button class="btn btn-primary" type="submit" disabled={!can_submit}>
                    { if *is_loading { "Logging in..." } else { "Login" } }
                </button>
                <p class="mt-2">
                    { "No account yet? " }
                    <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                </p>
            </form>
        </div>
    }
}
