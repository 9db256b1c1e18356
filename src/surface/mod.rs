use std::collections::BTreeSet;

use crate::state::Visibility;
use crate::ui::VISIBLE_TOKENS;

/// Elements of the surface that accept style tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// Outer region; carries the visibility tokens.
    Container,
    /// Themable child of the container; carries the kind tokens.
    Panel,
}

/// Regions of the surface that accept plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Title,
    Message,
    Icon,
}

/// The view a [`crate::ToastPresenter`] renders into.
///
/// Visibility lives on the surface only; the presenter never caches it.
pub trait ToastSurface {
    fn has_container(&self) -> bool;
    fn add_tokens(&mut self, target: StyleTarget, tokens: &[&str]);
    fn remove_tokens(&mut self, target: StyleTarget, tokens: &[&str]);
    fn set_text(&mut self, slot: TextSlot, text: &str);
    fn visibility(&self) -> Visibility;
}

/// Surface kept entirely in memory, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    container: Option<BTreeSet<String>>,
    panel: BTreeSet<String>,
    title: String,
    message: String,
    icon: String,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            container: Some(BTreeSet::new()),
            ..Self::default()
        }
    }

    pub fn without_container() -> Self {
        Self::default()
    }

    /// Drops the container, as when the host removes it from the page.
    pub fn detach_container(&mut self) {
        self.container = None;
    }

    pub fn tokens(&self, target: StyleTarget) -> Vec<&str> {
        match target {
            StyleTarget::Container => self
                .container
                .iter()
                .flatten()
                .map(String::as_str)
                .collect(),
            StyleTarget::Panel => self.panel.iter().map(String::as_str).collect(),
        }
    }

    pub fn has_token(&self, target: StyleTarget, token: &str) -> bool {
        match target {
            StyleTarget::Container => self
                .container
                .as_ref()
                .is_some_and(|tokens| tokens.contains(token)),
            StyleTarget::Panel => self.panel.contains(token),
        }
    }

    pub fn text(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::Title => &self.title,
            TextSlot::Message => &self.message,
            TextSlot::Icon => &self.icon,
        }
    }

    fn token_set(&mut self, target: StyleTarget) -> Option<&mut BTreeSet<String>> {
        match target {
            StyleTarget::Container => self.container.as_mut(),
            StyleTarget::Panel => Some(&mut self.panel),
        }
    }
}

impl ToastSurface for MemorySurface {
    fn has_container(&self) -> bool {
        self.container.is_some()
    }

    fn add_tokens(&mut self, target: StyleTarget, tokens: &[&str]) {
        if let Some(set) = self.token_set(target) {
            set.extend(tokens.iter().map(|token| (*token).to_string()));
        }
    }

    fn remove_tokens(&mut self, target: StyleTarget, tokens: &[&str]) {
        if let Some(set) = self.token_set(target) {
            for token in tokens {
                set.remove(*token);
            }
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let field = match slot {
            TextSlot::Title => &mut self.title,
            TextSlot::Message => &mut self.message,
            TextSlot::Icon => &mut self.icon,
        };
        text.clone_into(field);
    }

    fn visibility(&self) -> Visibility {
        if VISIBLE_TOKENS
            .iter()
            .all(|token| self.has_token(StyleTarget::Container, token))
        {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_surface_is_hidden_and_empty() {
        let surface = MemorySurface::new();
        assert!(surface.has_container());
        assert_eq!(surface.visibility(), Visibility::Hidden);
        assert!(surface.tokens(StyleTarget::Panel).is_empty());
        assert_eq!(surface.text(TextSlot::Title), "");
    }

    #[test]
    fn tokens_are_added_and_removed_per_target() {
        let mut surface = MemorySurface::new();
        surface.add_tokens(StyleTarget::Panel, &["a", "b"]);
        surface.add_tokens(StyleTarget::Container, &["c"]);
        surface.remove_tokens(StyleTarget::Panel, &["a", "missing"]);

        assert_eq!(surface.tokens(StyleTarget::Panel), vec!["b"]);
        assert_eq!(surface.tokens(StyleTarget::Container), vec!["c"]);
    }

    #[test]
    fn visibility_follows_visible_tokens_on_container() {
        let mut surface = MemorySurface::new();
        surface.add_tokens(StyleTarget::Container, &VISIBLE_TOKENS);
        assert_eq!(surface.visibility(), Visibility::Visible);

        surface.remove_tokens(StyleTarget::Container, &VISIBLE_TOKENS[..1]);
        assert_eq!(surface.visibility(), Visibility::Hidden);
    }

    #[test]
    fn detached_container_loses_its_tokens() {
        let mut surface = MemorySurface::new();
        surface.add_tokens(StyleTarget::Container, &VISIBLE_TOKENS);
        surface.detach_container();
        assert!(!surface.has_container());
        assert_eq!(surface.visibility(), Visibility::Hidden);
    }

    #[test]
    fn surface_without_container_ignores_container_tokens() {
        let mut surface = MemorySurface::without_container();
        surface.add_tokens(StyleTarget::Container, &VISIBLE_TOKENS);
        assert!(!surface.has_container());
        assert!(surface.tokens(StyleTarget::Container).is_empty());
        assert_eq!(surface.visibility(), Visibility::Hidden);
    }
}
