pub mod event;
pub mod machine;
pub mod model;

pub use event::ToastEvent;
pub use machine::next_visibility;
pub use model::Visibility;
