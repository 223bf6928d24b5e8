use serde::{Deserialize, Serialize};

/// The name/email pair exchanged with the API, both on `POST /users` and in
/// the `GET /users` list body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}
