//! User-facing notices.

use crate::config::Locale;

/// Feedback shown to the user after a favorite action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The user tried to toggle a favorite while signed out.
    LoginRequired,
    Added,
    AddFailed,
    Removed,
    RemoveFailed,
}

impl Notice {
    pub fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Notice::LoginRequired => "You must sign in to manage favorites.",
                Notice::Added => "Product added to favorites",
                Notice::AddFailed => "Could not add to favorites",
                Notice::Removed => "Product removed from favorites",
                Notice::RemoveFailed => "Could not remove from favorites",
            },
            Locale::Es => match self {
                Notice::LoginRequired => "Debes iniciar sesión para gestionar favoritos.",
                Notice::Added => "Producto agregado a favoritos",
                Notice::AddFailed => "No se pudo agregar a favoritos",
                Notice::Removed => "Producto eliminado de favoritos",
                Notice::RemoveFailed => "No se pudo eliminar de favoritos",
            },
        }
    }
}

/// Shows a notice to the user. The browser implementation blocks on `alert`.
pub trait Notifier {
    fn notify(&self, notice: Notice, message: &str);
}

/// Drops every notice. For server-side rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, notice: Notice, _message: &str) {
        tracing::debug!(?notice, "notice suppressed");
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use recording::RecordingNotifier;

#[cfg(any(test, feature = "test-util"))]
mod recording {
    use super::{Notice, Notifier};
    use std::cell::RefCell;

    /// Keeps every notice for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        seen: RefCell<Vec<(Notice, String)>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn notices(&self) -> Vec<Notice> {
            self.seen.borrow().iter().map(|(n, _)| *n).collect()
        }

        pub fn messages(&self) -> Vec<String> {
            self.seen.borrow().iter().map(|(_, m)| m.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice, message: &str) {
            self.seen.borrow_mut().push((notice, message.to_string()));
        }
    }
}
