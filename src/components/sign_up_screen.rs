use gloo_timers::callback::Timeout;
use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::state::FormState;
use crate::stores::SessionStore;

/// Milisegundos que el mensaje de éxito queda visible antes de volver al login
const BACK_TO_SIGN_IN_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct SignUpScreenProps {
    pub on_show_sign_in: Callback<()>,
}

#[function_component(SignUpScreen)]
pub fn sign_up_screen(props: &SignUpScreenProps) -> Html {
    let form = use_state(FormState::new);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("name", input.value());
            form.set(next);
        })
    };

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

    let on_submit = {
        let form = form.clone();
        let on_show_sign_in = props.on_show_sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }

            let name = next.field("name").trim().to_string();
            let email = next.field("email").trim().to_string();
            let password = next.field("password");

            if name.is_empty() || email.is_empty() || password.is_empty() {
                next.fail("Please fill in all fields.");
                form.set(next);
                return;
            }

            form.set(next);

            let form = form.clone();
            let on_show_sign_in = on_show_sign_in.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::sign_up(&email, &password, &name).await {
                    Ok(()) => {
                        // El registro no autentica: se vuelve al login
                        let mut next = (*form).clone();
                        next.succeed("Account created! You can sign in now.");
                        form.set(next);

                        Timeout::new(BACK_TO_SIGN_IN_MS, move || {
                            on_show_sign_in.emit(());
                        })
                        .forget();
                    }
                    Err(message) => {
                        log::error!("❌ Error en registro: {}", message);
                        let mut next = (*form).clone();
                        next.fail(message);
                        form.set(next);
                    }
                }
            });
        })
    };

    let submitting = form.is_submitting();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Create an Account"}</h1>
                </div>

                {
                    if let Some(message) = form.error() {
                        html! { <p class="message-error">{message.to_string()}</p> }
                    } else if let Some(message) = form.success() {
                        html! { <p class="message-success">{message.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            placeholder="Enter your name"
                            value={form.field("name")}
                            oninput={on_name_input}
                        />
                    </div>

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
                        { if submitting { "Signing Up..." } else { "Sign Up" } }
                    </button>
                </form>

                <div class="login-footer">
                    <p>{"Already have an account?"}</p>
                    <button
                        type="button"
                        class="btn-link"
                        onclick={props.on_show_sign_in.reform(|_| ())}
                    >
                        {"Log In"}
                    </button>
                </div>
            </div>
        </div>
    }
}
