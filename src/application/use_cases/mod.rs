//! Use case implementations.

mod login_use_case;
mod logout_use_case;
mod register_use_case;
mod submit_additional_info_use_case;

pub use login_use_case::LoginUseCase;
pub use logout_use_case::LogoutUseCase;
pub use register_use_case::RegisterUseCase;
pub use submit_additional_info_use_case::SubmitAdditionalInfoUseCase;
