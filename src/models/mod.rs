pub mod auth;
pub mod quotation;
pub mod session;
pub mod user;

pub use auth::{
    ApiErrorBody, SessionResponse, SignInRequest, SignInResponse, SignUpRequest,
    SocialSignInRequest, SocialSignInResponse, StoredCredential, UpdateUserRequest,
};
pub use quotation::{NewQuotationRequest, QuotationDraft};
pub use session::{SessionSnapshot, SessionStatus};
pub use user::User;
