use crate::state::Visibility;
use crate::toast::ToastKind;

/// Presentation of one toast kind: gradient and border tokens for the panel plus its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub gradient: [&'static str; 2],
    pub border: &'static str,
    pub icon: &'static str,
}

impl ToastStyle {
    pub fn tokens(&self) -> [&'static str; 3] {
        [self.gradient[0], self.gradient[1], self.border]
    }
}

pub const NORMAL_STYLE: ToastStyle = ToastStyle {
    gradient: ["from-purple-600", "to-pink-600"],
    border: "border-purple-400",
    icon: "🎉",
};

pub const SUCCESS_STYLE: ToastStyle = ToastStyle {
    gradient: ["from-green-600", "to-emerald-600"],
    border: "border-green-400",
    icon: "✅",
};

pub const ERROR_STYLE: ToastStyle = ToastStyle {
    gradient: ["from-red-600", "to-rose-600"],
    border: "border-red-400",
    icon: "❌",
};

pub const INFO_STYLE: ToastStyle = ToastStyle {
    gradient: ["from-blue-600", "to-indigo-600"],
    border: "border-blue-400",
    icon: "ℹ️",
};

/// Every token any kind may leave on the panel. Cleared before each restyle.
pub const KIND_STYLE_TOKENS: [&str; 12] = [
    "from-purple-600",
    "to-pink-600",
    "border-purple-400",
    "from-green-600",
    "to-emerald-600",
    "border-green-400",
    "from-red-600",
    "to-rose-600",
    "border-red-400",
    "from-blue-600",
    "to-indigo-600",
    "border-blue-400",
];

pub const HIDDEN_TOKENS: [&str; 2] = ["opacity-0", "translate-y-16"];
pub const VISIBLE_TOKENS: [&str; 2] = ["opacity-100", "translate-y-0"];

pub fn style_for(kind: ToastKind) -> &'static ToastStyle {
    match kind {
        ToastKind::Normal => &NORMAL_STYLE,
        ToastKind::Success => &SUCCESS_STYLE,
        ToastKind::Error => &ERROR_STYLE,
        ToastKind::Info => &INFO_STYLE,
    }
}

pub fn visibility_tokens(visibility: Visibility) -> &'static [&'static str] {
    match visibility {
        Visibility::Hidden => &HIDDEN_TOKENS,
        Visibility::Visible => &VISIBLE_TOKENS,
    }
}

/// Compile-time layout tokens used by the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_8: i32,
    pub spacing_12: i32,
    pub spacing_16: i32,
    pub card_radius: u16,
    pub border_width: u16,
    pub slide_offset_px: u16,
    pub motion_standard_ms: u32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_8: 8,
    spacing_12: 12,
    spacing_16: 16,
    card_radius: 14,
    border_width: 2,
    slide_offset_px: 64,
    motion_standard_ms: 300,
};
