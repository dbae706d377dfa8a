mod api;
mod components;
mod config_file;
mod context;
mod fetch_state;
mod hooks;
mod pages;
mod router;

use crate::config_file::{load_config, AppConfig};
use crate::context::AuthProvider;
use crate::router::AppRouter;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(|| None::<AppConfig>);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                config.set(Some(load_config().await));
            });
            || ()
        });
    }

    let Some(config) = (*config).clone() else {
        return html! { "Loading..." };
    };

    html! {
        <ContextProvider<AppConfig> context={config}>
            <AuthProvider>
                <AppRouter />
            </AuthProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
