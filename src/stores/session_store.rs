// ============================================================================
// SESSION STORE - estado de sesión de todo el proceso
// ============================================================================
// Singleton por hilo (WASM es monohilo) con subscribe/notify explícito.
// Es el ÚNICO dueño de la sesión y del slot de credencial: las pantallas
// solo leen instantáneas y disparan operaciones.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::auth::UpdateUserRequest;
use crate::models::session::SessionSnapshot;
use crate::services::auth_client;
use crate::utils::storage;

type Subscriber = Rc<dyn Fn(SessionSnapshot)>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriptionId(usize);

pub struct SessionStore {
    snapshot: RefCell<SessionSnapshot>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_subscriber_id: Cell<usize>,
    resolve_started: Cell<bool>,
}

thread_local! {
    static STORE: SessionStore = SessionStore::new();
}

impl SessionStore {
    fn new() -> Self {
        Self {
            snapshot: RefCell::new(SessionSnapshot::pending()),
            subscribers: RefCell::new(Vec::new()),
            next_subscriber_id: Cell::new(0),
            resolve_started: Cell::new(false),
        }
    }

    /// Última instantánea conocida
    pub fn snapshot() -> SessionSnapshot {
        STORE.with(|store| store.snapshot.borrow().clone())
    }

    /// Se suscribe a cambios; el callback recibe cada nueva instantánea
    pub fn subscribe(callback: impl Fn(SessionSnapshot) + 'static) -> SubscriptionId {
        STORE.with(|store| {
            let id = store.next_subscriber_id.get();
            store.next_subscriber_id.set(id + 1);
            store.subscribers.borrow_mut().push((id, Rc::new(callback)));
            SubscriptionId(id)
        })
    }

    pub fn unsubscribe(id: SubscriptionId) {
        STORE.with(|store| {
            store.subscribers.borrow_mut().retain(|(sid, _)| *sid != id.0);
        });
    }

    /// La primera suscripción dispara la resolución; las siguientes no repiten
    pub fn ensure_resolved() {
        let already_started = STORE.with(|store| store.resolve_started.replace(true));
        if !already_started {
            wasm_bindgen_futures::spawn_local(async {
                Self::resolve().await;
            });
        }
    }

    /// Publica una instantánea y notifica a todos los suscriptores.
    /// Los callbacks corren fuera del borrow para permitir re-entrada
    /// (un suscriptor puede leer snapshot() o darse de baja).
    fn publish(next: SessionSnapshot) {
        let subscribers: Vec<Subscriber> = STORE.with(|store| {
            *store.snapshot.borrow_mut() = next.clone();
            store
                .subscribers
                .borrow()
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect()
        });

        for callback in subscribers {
            callback(next.clone());
        }
    }

    /// Resuelve la sesión contra el colaborador de identidad
    pub async fn resolve() {
        log::info!("🔍 Resolviendo sesión...");
        match auth_client::get_session().await {
            Ok(Some(user)) => {
                log::info!("✅ Sesión activa: {}", user.email);
                Self::publish(SessionSnapshot::authenticated(user));
            }
            Ok(None) => {
                log::info!("ℹ️ Sin sesión activa");
                Self::publish(SessionSnapshot::unauthenticated());
            }
            Err(e) => {
                // Un fallo de transporte NO es "sin sesión": se publica
                // como error para no enmascararlo como logout
                log::error!("❌ Error resolviendo sesión: {}", e);
                Self::publish(SessionSnapshot::failed(e));
            }
        }
    }

    /// Reintenta la resolución tras un fallo (pasa por pending primero)
    pub fn retry_resolve() {
        Self::publish(SessionSnapshot::pending());
        wasm_bindgen_futures::spawn_local(async {
            Self::resolve().await;
        });
    }

    /// Login con credenciales. En éxito persiste el token y publica la
    /// sesión autenticada; en fallo la instantánea queda como estaba.
    pub async fn sign_in_with_credentials(email: &str, password: &str) -> Result<(), String> {
        let outcome = auth_client::sign_in_email(email, password).await?;

        match &outcome.token {
            Some(token) => {
                if let Err(e) = storage::save_credential(token) {
                    log::warn!("⚠️ No se pudo guardar la credencial: {}", e);
                }
            }
            None => log::warn!("⚠️ La respuesta de login no trajo token bearer"),
        }

        log::info!("✅ Login exitoso: {}", outcome.user.email);
        Self::publish(SessionSnapshot::authenticated(outcome.user));
        Ok(())
    }

    /// Login social por redirección; el desenlace queda fuera de este flujo
    pub async fn sign_in_with_provider(provider: &str, callback_url: &str) -> Result<(), String> {
        let redirect = auth_client::sign_in_social(provider, callback_url).await?;
        match redirect {
            Some(url) => {
                if let Some(window) = web_sys::window() {
                    window
                        .location()
                        .assign(&url)
                        .map_err(|_| "Could not redirect to the identity provider.".to_string())?;
                }
                Ok(())
            }
            None => Err("The identity provider did not return a redirect URL.".to_string()),
        }
    }

    /// Crea una cuenta. No autentica: la pantalla decide el siguiente paso.
    pub async fn sign_up(email: &str, password: &str, name: &str) -> Result<(), String> {
        auth_client::sign_up_email(name, email, password).await?;
        log::info!("📝 Cuenta creada: {}", email);
        Ok(())
    }

    /// Actualiza el perfil. En éxito parchea el usuario cacheado en sitio;
    /// en fallo la sesión no cambia.
    pub async fn update_user(patch: UpdateUserRequest) -> Result<(), String> {
        auth_client::update_user(&patch).await?;

        let current = Self::snapshot();
        if let Some(mut user) = current.user {
            if let Some(name) = patch.name {
                user.name = name;
            }
            Self::publish(SessionSnapshot::authenticated(user));
        }
        Ok(())
    }

    /// Borra la cuenta. En éxito limpia la credencial y publica
    /// no-autenticado sea cual sea el estado previo.
    pub async fn delete_user() -> Result<(), String> {
        auth_client::delete_user().await?;
        storage::clear_credential();
        log::info!("🗑️ Cuenta eliminada");
        Self::publish(SessionSnapshot::unauthenticated());
        Ok(())
    }

    /// Cierra sesión. La credencial local se limpia aunque el colaborador
    /// falle: un logout nunca deja al usuario "a medias".
    pub async fn sign_out() {
        if let Err(e) = auth_client::sign_out().await {
            log::warn!("⚠️ Error cerrando sesión en el servidor: {}", e);
        }
        storage::clear_credential();
        log::info!("👋 Logout");
        Self::publish(SessionSnapshot::unauthenticated());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    // Un único test cubre todo el ciclo para no compartir el singleton
    // entre tests (el STORE es por hilo).
    #[test]
    fn subscribe_publish_unsubscribe_roundtrip() {
        let seen: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::new(RefCell::new(Vec::new()));

        assert!(SessionStore::snapshot().is_pending());

        let id = SessionStore::subscribe({
            let seen = seen.clone();
            move |snapshot| seen.borrow_mut().push(snapshot)
        });

        SessionStore::publish(SessionSnapshot::unauthenticated());
        assert_eq!(seen.borrow().len(), 1);
        assert!(!seen.borrow()[0].is_authenticated());
        assert!(!seen.borrow()[0].is_failed());

        SessionStore::publish(SessionSnapshot::authenticated(user()));
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[1].can_mutate());
        assert!(SessionStore::snapshot().is_authenticated());

        // Tras darse de baja no llegan más instantáneas
        SessionStore::unsubscribe(id);
        SessionStore::publish(SessionSnapshot::unauthenticated());
        assert_eq!(seen.borrow().len(), 2);

        // ...pero la instantánea global sí avanzó (logout = resuelto sin usuario)
        let last = SessionStore::snapshot();
        assert!(!last.is_authenticated());
        assert!(!last.is_failed());
        assert!(!last.is_pending());
    }
}
