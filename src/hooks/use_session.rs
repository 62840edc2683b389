// ============================================================================
// USE SESSION HOOK - puente entre el SessionStore y Yew
// ============================================================================
// El componente se suscribe al montar y se da de baja al desmontar.
// La primera suscripción del proceso dispara la resolución de sesión.
// ============================================================================

use yew::prelude::*;

use crate::models::session::SessionSnapshot;
use crate::stores::session_store::SessionStore;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: SessionSnapshot,
    pub sign_out: Callback<()>,
    pub retry: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let snapshot = use_state(SessionStore::snapshot);

    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let id = SessionStore::subscribe(move |next| snapshot.set(next));
            SessionStore::ensure_resolved();
            move || SessionStore::unsubscribe(id)
        });
    }

    let sign_out = Callback::from(|_| {
        wasm_bindgen_futures::spawn_local(async {
            SessionStore::sign_out().await;
        });
    });

    let retry = Callback::from(|_| SessionStore::retry_resolve());

    UseSessionHandle {
        session: (*snapshot).clone(),
        sign_out,
        retry,
    }
}
