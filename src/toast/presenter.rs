use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{load_toast_config, OverlapPolicy, ToastConfig};
use crate::error::{ToastError, ToastResult};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::state::{next_visibility, ToastEvent, Visibility};
use crate::surface::{StyleTarget, TextSlot, ToastSurface};
use crate::ui::{style_for, visibility_tokens, KIND_STYLE_TOKENS};

use super::{ToastKind, ToastRequest};

/// Renders toasts into a shared surface and retracts them on a timer or on demand.
pub struct ToastPresenter<S, C> {
    surface: Rc<RefCell<S>>,
    scheduler: C,
    config: ToastConfig,
    pending_hide: RefCell<Option<TimerHandle>>,
}

impl<S, C> ToastPresenter<S, C>
where
    S: ToastSurface + 'static,
    C: Scheduler,
{
    pub fn new(surface: Rc<RefCell<S>>, scheduler: C) -> Self {
        Self::with_config(surface, scheduler, ToastConfig::default())
    }

    /// Uses `toast.json` from the user's config directory, or defaults.
    pub fn with_user_config(surface: Rc<RefCell<S>>, scheduler: C) -> Self {
        Self::with_config(surface, scheduler, load_toast_config())
    }

    pub fn with_config(surface: Rc<RefCell<S>>, scheduler: C, config: ToastConfig) -> Self {
        Self {
            surface,
            scheduler,
            config,
            pending_hide: RefCell::new(None),
        }
    }

    pub fn surface(&self) -> &Rc<RefCell<S>> {
        &self.surface
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn visibility(&self) -> Visibility {
        self.surface.borrow().visibility()
    }

    /// Shows a toast from a string kind tag, using the configured default duration.
    pub fn show_with(&self, title: &str, message: &str, kind_tag: &str) {
        let request = ToastRequest::new(title, message)
            .kind(ToastKind::from_tag(kind_tag))
            .duration(self.config.default_duration());
        self.show(request);
    }

    /// Does nothing when the surface has no container.
    pub fn show(&self, request: ToastRequest) {
        {
            let mut surface = self.surface.borrow_mut();
            if !surface.has_container() {
                tracing::debug!(title = %request.title, "toast container missing; skipping show");
                return;
            }

            let style = style_for(request.kind);
            surface.remove_tokens(StyleTarget::Panel, &KIND_STYLE_TOKENS);
            surface.add_tokens(StyleTarget::Panel, &style.tokens());
            surface.set_text(TextSlot::Icon, style.icon);
            surface.set_text(TextSlot::Title, &request.title);
            surface.set_text(TextSlot::Message, &request.message);
            apply_event(&mut *surface, ToastEvent::Show);
        }

        tracing::debug!(
            kind = %request.kind,
            duration_ms = u64::try_from(request.duration.as_millis()).unwrap_or(u64::MAX),
            "toast shown"
        );
        self.schedule_hide(&request);
    }

    /// Hides the toast now, leaving any deferred hide in place unless the
    /// overlap policy cancels it.
    pub fn hide(&self) -> ToastResult<()> {
        let mut surface = self.surface.borrow_mut();
        if !surface.has_container() {
            tracing::warn!("hide requested without a toast container");
            return Err(ToastError::MissingContainer);
        }

        if self.config.overlap == OverlapPolicy::CancelPrevious {
            self.cancel_pending_hide();
        }
        apply_event(&mut *surface, ToastEvent::Hide);
        Ok(())
    }

    fn schedule_hide(&self, request: &ToastRequest) {
        if self.config.overlap == OverlapPolicy::CancelPrevious {
            self.cancel_pending_hide();
        }

        let surface = self.surface.clone();
        let handle = self.scheduler.run_after(
            request.duration,
            Box::new(move || {
                let mut surface = surface.borrow_mut();
                if !surface.has_container() {
                    tracing::warn!("toast container vanished before deferred hide");
                    return;
                }
                apply_event(&mut *surface, ToastEvent::Expire);
            }),
        );

        if self.config.overlap == OverlapPolicy::CancelPrevious {
            *self.pending_hide.borrow_mut() = Some(handle);
        }
    }

    fn cancel_pending_hide(&self) {
        if let Some(handle) = self.pending_hide.borrow_mut().take() {
            tracing::debug!("cancelling pending deferred hide");
            handle.cancel();
        }
    }
}

fn apply_event<S: ToastSurface + ?Sized>(surface: &mut S, event: ToastEvent) {
    let next = next_visibility(surface.visibility(), event);
    let previous = match next {
        Visibility::Visible => Visibility::Hidden,
        Visibility::Hidden => Visibility::Visible,
    };
    surface.remove_tokens(StyleTarget::Container, visibility_tokens(previous));
    surface.add_tokens(StyleTarget::Container, visibility_tokens(next));
}
