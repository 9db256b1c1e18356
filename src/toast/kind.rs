use std::fmt;
use std::str::FromStr;

/// Selects the colour and icon variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Normal,
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [Self::Normal, Self::Success, Self::Error, Self::Info];

    /// Unknown or empty tags resolve to `Normal`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => Self::Success,
            "error" => Self::Error,
            "info" => Self::Info,
            _ => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl FromStr for ToastKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
