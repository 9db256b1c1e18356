//! GTK 4 binding: widgets as the toast surface, the glib main loop as the scheduler.

use std::time::Duration;

use gtk4::prelude::*;
use gtk4::{glib, Align, CssProvider, Label, Orientation, Widget};

use crate::scheduler::{Scheduler, Task, TimerHandle};
use crate::state::Visibility;
use crate::surface::{StyleTarget, TextSlot, ToastSurface};
use crate::ui::{
    toast_stylesheet, CONTAINER_CLASS, HIDDEN_TOKENS, LAYOUT_TOKENS, PANEL_CLASS, VISIBLE_TOKENS,
};

/// Toast surface backed by GTK widgets; style tokens become CSS classes.
#[derive(Debug, Clone)]
pub struct GtkToastSurface {
    container: Option<Widget>,
    panel: Widget,
    title: Label,
    message: Label,
    icon: Label,
}

impl GtkToastSurface {
    pub fn new(
        container: Option<&impl IsA<Widget>>,
        panel: &impl IsA<Widget>,
        title: &Label,
        message: &Label,
        icon: &Label,
    ) -> Self {
        Self {
            container: container.map(|widget| widget.clone().upcast()),
            panel: panel.clone().upcast(),
            title: title.clone(),
            message: message.clone(),
            icon: icon.clone(),
        }
    }

    /// Builds the standard toast widget tree, initially hidden.
    ///
    /// Returns the surface together with the root widget to place in a window.
    pub fn build() -> (Self, gtk4::Box) {
        let tokens = LAYOUT_TOKENS;

        let container = gtk4::Box::new(Orientation::Vertical, 0);
        container.add_css_class(CONTAINER_CLASS);
        for token in HIDDEN_TOKENS {
            container.add_css_class(token);
        }
        container.set_halign(Align::End);
        container.set_valign(Align::End);
        container.set_margin_end(tokens.spacing_16);
        container.set_margin_bottom(tokens.spacing_16);

        let panel = gtk4::Box::new(Orientation::Horizontal, tokens.spacing_12);
        panel.add_css_class(PANEL_CLASS);

        let icon = Label::new(None);
        icon.add_css_class("toast-icon");
        let text_column = gtk4::Box::new(Orientation::Vertical, 0);
        let title = Label::new(None);
        title.add_css_class("toast-title");
        title.set_halign(Align::Start);
        let message = Label::new(None);
        message.add_css_class("toast-message");
        message.set_halign(Align::Start);
        message.set_wrap(true);

        text_column.append(&title);
        text_column.append(&message);
        panel.append(&icon);
        panel.append(&text_column);
        container.append(&panel);

        let surface = Self::new(Some(&container), &panel, &title, &message, &icon);
        (surface, container)
    }

    fn target(&self, target: StyleTarget) -> Option<&Widget> {
        match target {
            StyleTarget::Container => self.container.as_ref(),
            StyleTarget::Panel => Some(&self.panel),
        }
    }
}

impl ToastSurface for GtkToastSurface {
    fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn add_tokens(&mut self, target: StyleTarget, tokens: &[&str]) {
        if let Some(widget) = self.target(target) {
            for token in tokens {
                widget.add_css_class(token);
            }
        }
    }

    fn remove_tokens(&mut self, target: StyleTarget, tokens: &[&str]) {
        if let Some(widget) = self.target(target) {
            for token in tokens {
                widget.remove_css_class(token);
            }
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let label = match slot {
            TextSlot::Title => &self.title,
            TextSlot::Message => &self.message,
            TextSlot::Icon => &self.icon,
        };
        label.set_text(text);
    }

    fn visibility(&self) -> Visibility {
        let visible = self.container.as_ref().is_some_and(|container| {
            VISIBLE_TOKENS
                .iter()
                .all(|token| container.has_css_class(token))
        });
        if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Schedules tasks on the thread-default glib main context.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlibScheduler;

impl Scheduler for GlibScheduler {
    fn run_after(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        let guard = handle.clone();
        glib::timeout_add_local_once(delay, move || {
            if guard.is_cancelled() {
                return;
            }
            task();
        });
        handle
    }
}

/// Registers the toast stylesheet for the default display.
pub fn install_stylesheet(motion_enabled: bool) {
    let css = toast_stylesheet(LAYOUT_TOKENS, motion_enabled);
    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("no default display; toast stylesheet not installed");
    }
}
