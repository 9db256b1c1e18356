/// Everything that can move the toast between its two visibility states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastEvent {
    Show,
    Expire,
    Hide,
}
