use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::state::FormState;
use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct SignInScreenProps {
    pub on_show_sign_up: Callback<()>,
}

#[function_component(SignInScreen)]
pub fn sign_in_screen(props: &SignInScreenProps) -> Html {
    let form = use_state(FormState::new);

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("email", input.value());
            form.set(next);
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("password", input.value());
            form.set(next);
        })
    };

    // Login con credenciales
    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }

            let email = next.field("email").trim().to_string();
            let password = next.field("password");

            if email.is_empty() || password.is_empty() {
                next.fail("Please enter your email and password.");
                form.set(next);
                return;
            }

            form.set(next);

            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::sign_in_with_credentials(&email, &password).await {
                    Ok(()) => {
                        // La sesión publicada desmonta esta pantalla
                    }
                    Err(message) => {
                        log::error!("❌ Error en login: {}", message);
                        let mut next = (*form).clone();
                        next.fail(message);
                        form.set(next);
                    }
                }
            });
        })
    };

    // Login con Google (flujo por redirección)
    let on_google_sign_in = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }
            form.set(next);

            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let origin = web_sys::window()
                    .and_then(|w| w.location().origin().ok())
                    .unwrap_or_default();
                let callback_url = format!("{}/dashboard", origin);

                if let Err(message) =
                    SessionStore::sign_in_with_provider("google", &callback_url).await
                {
                    log::error!("❌ Error en login social: {}", message);
                    let mut next = (*form).clone();
                    next.fail(message);
                    form.set(next);
                }
                // En éxito el navegador redirige al proveedor; no hay más que hacer
            });
        })
    };

    let submitting = form.is_submitting();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Sign In"}</h1>
                </div>

                {
                    if let Some(message) = form.error() {
                        html! { <p class="message-error">{message.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Enter your email"
                            value={form.field("email")}
                            oninput={on_email_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            value={form.field("password")}
                            oninput={on_password_input}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={submitting}>
                        { if submitting { "Signing In..." } else { "Sign In" } }
                    </button>
                </form>

                <button
                    type="button"
                    class="btn-google"
                    onclick={on_google_sign_in}
                    disabled={submitting}
                >
                    { if submitting { "Redirecting to Google..." } else { "Sign In with Google" } }
                </button>

                <div class="login-footer">
                    <p>{"Do not have an account?"}</p>
                    <button
                        type="button"
                        class="btn-link"
                        onclick={props.on_show_sign_up.reform(|_| ())}
                    >
                        {"Sign Up"}
                    </button>
                </div>
            </div>
        </div>
    }
}
