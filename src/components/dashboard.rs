use yew::prelude::*;

use crate::components::{AddQuotation, UpdateUserName};
use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub on_sign_out: Callback<()>,
}

/// Panel principal: ficha del usuario + formularios de perfil y cotización
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

    html! {
        <div class="dashboard">
            <div class="user-card">
                <div class="user-avatar">{"👤"}</div>
                <h1>{props.user.name.clone()}</h1>
                <p class="user-email">{props.user.email.clone()}</p>
                <button class="btn-sign-out" onclick={on_sign_out}>
                    {"Sign Out"}
                </button>
            </div>

            <UpdateUserName />

            <AddQuotation />
        </div>
    }
}
