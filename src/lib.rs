// ============================================================================
// QUOTATION PORTAL - FRONTEND Yew (RUST + WASM)
// ============================================================================
// Capas:
// - components: pantallas y composición de UI
// - hooks: puente entre el store de sesión y Yew
// - stores: estado de sesión (singleton de proceso, subscribe/notify)
// - services: SOLO comunicación HTTP con los colaboradores
// - state: FormState compartido por los formularios
// - models: estructuras compartidas con los colaboradores
// - utils: validación, storage, constantes
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
