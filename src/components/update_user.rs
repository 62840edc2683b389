use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::UpdateUserRequest;
use crate::state::FormState;
use crate::stores::SessionStore;

/// Formulario de perfil: renombrar usuario y borrar cuenta.
/// Ambas acciones comparten el mismo flag de envío, igual que comparten
/// botón de estado en la ficha: nunca corren a la vez.
#[function_component(UpdateUserName)]
pub fn update_user_name() -> Html {
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

    let on_update = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }

            let name = next.field("name").trim().to_string();
            if name.is_empty() {
                next.fail("Name cannot be empty.");
                form.set(next);
                return;
            }

            form.set(next);

            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let patch = UpdateUserRequest { name: Some(name) };
                match SessionStore::update_user(patch).await {
                    Ok(()) => {
                        let mut next = (*form).clone();
                        next.succeed("User name updated successfully!");
                        form.set(next);
                    }
                    Err(message) => {
                        log::error!("❌ Error actualizando usuario: {}", message);
                        let mut next = (*form).clone();
                        next.fail(message);
                        form.set(next);
                    }
                }
            });
        })
    };

    let on_delete = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Delete your account? This cannot be undone.")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }
            form.set(next);

            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::delete_user().await {
                    Ok(()) => {
                        // La sesión pasa a no autenticada y la app vuelve al login
                    }
                    Err(message) => {
                        log::error!("❌ Error borrando cuenta: {}", message);
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
        <div class="profile-card">
            <h1>{"Update User Name"}</h1>

            <div class="form-group">
                <label for="new-name">{"New Name"}</label>
                <input
                    type="text"
                    id="new-name"
                    name="name"
                    placeholder="Enter new name"
                    value={form.field("name")}
                    oninput={on_name_input}
                />
            </div>

            <button class="btn-update" onclick={on_update} disabled={submitting}>
                { if submitting { "Updating..." } else { "Update Name" } }
            </button>

            <button class="btn-delete" onclick={on_delete} disabled={submitting}>
                { if submitting { "Deleting..." } else { "Delete Account" } }
            </button>

            {
                if let Some(message) = form.error() {
                    html! { <p class="message-error">{message.to_string()}</p> }
                } else if let Some(message) = form.success() {
                    html! { <p class="message-success">{message.to_string()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
