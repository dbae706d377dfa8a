// frontend_movie_stream/src/components/auth_guard.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api::auth::AuthSession, context::use_auth, router::Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

pub fn guard_decision(session: Option<&AuthSession>) -> GuardDecision {
    match session {
        Some(_) => GuardDecision::Allow,
        None => GuardDecision::Deny,
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    pub children: Children,
}

/// Renders its children only for a signed-in user, otherwise sends them to the login page.
#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let auth = use_auth();

    match guard_decision(auth.session().as_ref()) {
        GuardDecision::Allow => html! {
            <div class="authenticated-content">
                { for props.children.iter() }
            </div>
        },
        GuardDecision::Deny => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denies_without_session() {
        assert_eq!(guard_decision(None), GuardDecision::Deny);
    }

    #[test]
    fn allows_with_session() {
        let session = AuthSession {
            token: "abc".into(),
            ..AuthSession::default()
        };
        assert_eq!(guard_decision(Some(&session)), GuardDecision::Allow);
    }
}
