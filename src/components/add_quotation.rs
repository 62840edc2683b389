use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::hooks::use_session;
use crate::models::QuotationDraft;
use crate::services::quotation_client;
use crate::state::FormState;
use crate::utils::validation::details_feedback;

/// Alta de cotización. Repite su propio gating de sesión aunque el
/// dashboard ya esté gateado: la pantalla es autosuficiente.
#[function_component(AddQuotation)]
pub fn add_quotation() -> Html {
    let handle = use_session();
    let form = use_state(FormState::new);
    // Feedback de validación inline, separado del valor crudo del campo
    let details_error = use_state(|| None::<String>);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("name", input.value());
            form.set(next);
        })
    };

    // Los detalles se validan en cada pulsación, además del submit
    let on_details_input = {
        let form = form.clone();
        let details_error = details_error.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let value = area.value();
            details_error.set(details_feedback(&value));
            let mut next = (*form).clone();
            next.set_field("quotation_details", value);
            form.set(next);
        })
    };

    let on_cost_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("total_cost", input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let details_error = details_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            if !next.begin_submit() {
                return;
            }

            let draft = QuotationDraft {
                name: next.field("name"),
                quotation_details: next.field("quotation_details"),
                total_cost: next.field("total_cost"),
            };

            // Revalidación completa en el envío: si falla no se llama a la API
            let request = match draft.validate() {
                Ok(request) => request,
                Err(message) => {
                    details_error.set(details_feedback(&draft.quotation_details));
                    next.fail(message);
                    form.set(next);
                    return;
                }
            };

            form.set(next);

            let form = form.clone();
            let details_error = details_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match quotation_client::create_quotation(&request).await {
                    Ok(()) => {
                        // Envío exitoso: el borrador vuelve a vacío
                        let mut next = (*form).clone();
                        next.succeed("Quotation added successfully!");
                        next.clear_fields();
                        details_error.set(None);
                        form.set(next);
                    }
                    Err(message) => {
                        // En fallo los campos se conservan tal cual
                        let mut next = (*form).clone();
                        next.fail(message);
                        form.set(next);
                    }
                }
            });
        })
    };

    // Gating de sesión: pendiente / error / no autenticado cortocircuitan
    // antes de que exista siquiera un botón de envío
    if handle.session.is_pending() {
        return html! {
            <div class="quotation-card">
                <p class="loading-text">{"Loading session..."}</p>
            </div>
        };
    }

    if handle.session.is_failed() {
        let message = handle.session.error.clone().unwrap_or_default();
        return html! {
            <div class="quotation-card">
                <p class="message-error">{format!("Error loading session: {}", message)}</p>
            </div>
        };
    }

    if !handle.session.can_mutate() {
        return html! {
            <div class="quotation-card">
                <p>{"Please log in to add a quotation."}</p>
            </div>
        };
    }

    let submitting = form.is_submitting();
    let submit_disabled = submitting || details_error.is_some();

    html! {
        <div class="quotation-card">
            <h1>{"Add New Quotation"}</h1>

            {
                if let Some(message) = form.error() {
                    html! { <div class="message-error">{message.to_string()}</div> }
                } else if let Some(message) = form.success() {
                    html! { <div class="message-success">{message.to_string()}</div> }
                } else {
                    html! {}
                }
            }

            <form class="quotation-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="quotation-name">{"Quotation Name"}</label>
                    <input
                        type="text"
                        id="quotation-name"
                        name="name"
                        value={form.field("name")}
                        oninput={on_name_input}
                    />
                </div>

                <div class="form-group">
                    <label for="quotation-details">{"Quotation Details (JSON)"}</label>
                    <textarea
                        id="quotation-details"
                        name="quotation_details"
                        value={form.field("quotation_details")}
                        oninput={on_details_input}
                    />
                    {
                        if let Some(message) = (*details_error).clone() {
                            html! { <p class="field-error">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="total-cost">{"Total Cost"}</label>
                    <input
                        type="number"
                        id="total-cost"
                        name="total_cost"
                        step="0.01"
                        value={form.field("total_cost")}
                        oninput={on_cost_input}
                    />
                </div>

                <button type="submit" class="btn-submit" disabled={submit_disabled}>
                    { if submitting { "Submitting..." } else { "Add Quotation" } }
                </button>
            </form>
        </div>
    }
}
