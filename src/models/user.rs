use serde::{Deserialize, Serialize};

/// Usuario autenticado según el proveedor de identidad
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
