// frontend_movie_stream/src/pages/register.rs
use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::auth::{self, RegisterRequest},
    context::use_public_client,
    router::Route,
};

const REGISTER_FAILED: &str = "Registration failed, please try again";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Required fields and matching passwords; the backend does the rest.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err("All fields are required");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }

        Ok(RegisterRequest {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Copy)]
enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

#[function_component(Register)]
pub fn register() -> Html {
    let form = use_state(RegisterForm::default);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let navigator = use_navigator();
    let client = use_public_client();

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match field {
                Field::FirstName => next.first_name = value,
                Field::LastName => next.last_name = value,
                Field::Email => next.email = value,
                Field::Password => next.password = value,
                Field::ConfirmPassword => next.confirm_password = value,
            }
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.validate() {
                Ok(request) => request,
                Err(msg) => {
                    error_message.set(Some(msg.to_owned()));
                    return;
                }
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let client = client.clone();

            spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match auth::register(&client, &request).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        error!(format!("Registration failed: {err}"));
                        error_message.set(Some(REGISTER_FAILED.to_owned()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let input = |kind: &'static str, placeholder: &'static str, value: &str, field: Field| {
        html! {
            <input
                class="form-control mb-2"
                type={kind}
                {placeholder}
                value={value.to_owned()}
                oninput={on_field(field)}
                disabled={*is_loading}
            />
        }
    };

    html! {
        <div class="login-container d-flex justify-content-center">
            <form class="login-card" {onsubmit}>
                <h1 class="mb-2">{ "Register" }</h1>

                if let Some(error) = (*error_message).as_ref() {
                    <div class="error-message mb-2">{ error }</div>
                }

                { input("text", "First name", &form.first_name, Field::FirstName) }
                { input("text", "Last name", &form.last_name, Field::LastName) }
                { input("email", "Email", &form.email, Field::Email) }
                { input("password", "Password", &form.password, Field::Password) }
                { input("password", "Confirm password", &form.confirm_password, Field::ConfirmPassword) }

                <button class="btn btn-primary" type="submit" disabled={*is_loading}>
                    { if *is_loading { "Registering..." } else { "Register" } }
                </button>
                <p class="mt-2">
                    { "Already registered? " }
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                </p>
            </form>
        </div>
    }
}
