use yew::prelude::*;

use crate::components::{Dashboard, SignInScreen, SignUpScreen};
use crate::hooks::use_session;

/// Pantalla de autenticación visible mientras no hay sesión
#[derive(Clone, Copy, PartialEq)]
enum AuthScreen {
    SignIn,
    SignUp,
}

#[function_component(App)]
pub fn app() -> Html {
    let handle = use_session();
    let auth_screen = use_state(|| AuthScreen::SignIn);

    let on_show_sign_up = {
        let auth_screen = auth_screen.clone();
        Callback::from(move |_| auth_screen.set(AuthScreen::SignUp))
    };

    let on_show_sign_in = {
        let auth_screen = auth_screen.clone();
        Callback::from(move |_| auth_screen.set(AuthScreen::SignIn))
    };

    // Sesión aún sin resolver: ningún botón de mutación es alcanzable
    if handle.session.is_pending() {
        return html! {
            <div class="screen-center">
                <p class="loading-text">{"Loading..."}</p>
            </div>
        };
    }

    // Fallo resolviendo la sesión: pantalla de error bloqueante con
    // reintento. NUNCA se muestra el login aquí: sería enmascarar un
    // fallo de infraestructura como logout.
    if handle.session.is_failed() {
        let message = handle
            .session
            .error
            .clone()
            .unwrap_or_else(|| "Unknown session error".to_string());
        let on_retry = handle.retry.reform(|_: MouseEvent| ());
        return html! {
            <div class="screen-center error-screen">
                <p class="message-error">{format!("Error loading session: {}", message)}</p>
                <button class="btn-retry" onclick={on_retry}>{"Retry"}</button>
            </div>
        };
    }

    match handle.session.user.clone() {
        Some(user) => html! {
            <Dashboard user={user} on_sign_out={handle.sign_out.clone()} />
        },
        None => match *auth_screen {
            AuthScreen::SignIn => html! {
                <SignInScreen on_show_sign_up={on_show_sign_up} />
            },
            AuthScreen::SignUp => html! {
                <SignUpScreen on_show_sign_in={on_show_sign_in} />
            },
        },
    }
}
