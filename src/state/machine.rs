use super::{ToastEvent, Visibility};

/// Every event is accepted from every state; the widget has no terminal state.
pub fn next_visibility(from: Visibility, event: ToastEvent) -> Visibility {
    let next = match event {
        ToastEvent::Show => Visibility::Visible,
        ToastEvent::Expire | ToastEvent::Hide => Visibility::Hidden,
    };
    tracing::debug!(from = ?from, event = ?event, to = ?next, "toast transition");
    next
}
