pub mod kind;
pub mod presenter;
pub mod request;

pub use kind::ToastKind;
pub use presenter::ToastPresenter;
pub use request::ToastRequest;
