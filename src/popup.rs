use crate::render::{popup_markup, PopupOptions};
use crate::resolve::{Payload, Resolver};

/// What the host should do with its popup after a text change.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RenderInstruction {
    /// No popup is visible: open one.
    Show(Payload),
    /// A popup is already visible: replace its contents in place.
    Update(Payload),
    /// Nothing matched, so stale content must go.
    Hide,
}

/// Popup primitives an editor host provides. Visibility state lives here, never in the core.
pub trait PopupHost {
    fn is_popup_visible(&self) -> bool;
    fn show_popup(&mut self, markup: &str, options: PopupOptions);
    fn update_popup(&mut self, markup: &str);
    fn hide_popup(&mut self);
}

/// Decide the popup effect for the word under the cursor.
pub fn on_text_changed(
    resolver: &Resolver,
    raw: &str,
    in_scope: bool,
    popup_visible: bool,
) -> RenderInstruction {
    match resolver.resolve(raw, in_scope) {
        Some(payload) if popup_visible => RenderInstruction::Update(payload),
        Some(payload) => RenderInstruction::Show(payload),
        None => RenderInstruction::Hide,
    }
}

impl RenderInstruction {
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Show(payload) | Self::Update(payload) => Some(payload),
            Self::Hide => None,
        }
    }

    pub fn apply<H: PopupHost + ?Sized>(self, host: &mut H) {
        match self {
            Self::Show(payload) => host.show_popup(&popup_markup(&payload), PopupOptions::default()),
            Self::Update(payload) => host.update_popup(&popup_markup(&payload)),
            Self::Hide => host.hide_popup(),
        }
    }
}

/// Query the host for visibility, decide, then apply.
pub fn refresh<H: PopupHost + ?Sized>(resolver: &Resolver, host: &mut H, raw: &str, in_scope: bool) {
    on_text_changed(resolver, raw, in_scope, host.is_popup_visible()).apply(host);
}
