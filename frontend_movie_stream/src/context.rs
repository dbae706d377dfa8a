// frontend_movie_stream/src/context.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::api::auth::{AuthSession, AuthStore};
use crate::api::client::{PrivateClient, PublicClient};
use crate::config_file::AppConfig;

/// Bumped on every session change so context consumers re-render.
#[derive(Default, PartialEq)]
pub struct SessionRevision(u64);

impl Reducible for SessionRevision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

/// Handle to the shared session, handed down through `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    store: AuthStore,
    revision: u64,
    notify: UseReducerDispatcher<SessionRevision>,
}

impl AuthContext {
    pub fn session(&self) -> Option<AuthSession> {
        self.store.get_session()
    }

    pub fn store(&self) -> AuthStore {
        self.store.clone()
    }

    pub fn sign_in(&self, session: AuthSession) {
        self.store.set_session(session);
        self.notify.dispatch(());
    }

    pub fn sign_out(&self) {
        self.store.clear_session();
        self.notify.dispatch(());
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_memo((), |_| AuthStore::default());
    let revision = use_reducer(SessionRevision::default);

    let context = AuthContext {
        store: (*store).clone(),
        revision: revision.0,
        notify: revision.dispatcher(),
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            { for props.children.iter() }
        </ContextProvider<AuthContext>>
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be called under <AuthProvider>")
}

#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::fallback)
}

#[hook]
pub fn use_public_client() -> PublicClient {
    let config = use_app_config();
    PublicClient::new(config.api_base_url)
}

/// Client that attaches the bearer token of whoever is signed in when a request leaves.
#[hook]
pub fn use_private_client() -> PrivateClient {
    let config = use_app_config();
    let auth = use_auth();
    PrivateClient::new(config.api_base_url, auth.store())
}
