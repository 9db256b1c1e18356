pub mod style;
pub mod stylesheet;

pub use style::{
    style_for, visibility_tokens, StyleTokens, ToastStyle, HIDDEN_TOKENS, KIND_STYLE_TOKENS,
    LAYOUT_TOKENS, VISIBLE_TOKENS,
};
pub use stylesheet::{toast_stylesheet, CONTAINER_CLASS, PANEL_CLASS};
