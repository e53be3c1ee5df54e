//! Page-level side effects held for as long as the booking modal is open.

use web_sys::HtmlElement;
use yew::NodeRef;

/// The bits of the surrounding page the modal needs to change.
pub trait PageChrome {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn set_nav_hidden(&self, hidden: bool);
    fn focus_dialog(&self);
}

/// Scroll lock and hidden navbar, released on drop.
///
/// Dropping covers every way the modal can go away: the close button,
/// Escape, the success timer and the component unmounting.
pub struct ModalSession<C: PageChrome> {
    chrome: C,
}

impl<C: PageChrome> ModalSession<C> {
    pub fn acquire(chrome: C) -> Self {
        chrome.lock_scroll();
        chrome.set_nav_hidden(true);
        Self { chrome }
    }

    /// Called once the dialog has been rendered.
    pub fn focus(&self) {
        self.chrome.focus_dialog();
    }
}

impl<C: PageChrome> Drop for ModalSession<C> {
    fn drop(&mut self) {
        self.chrome.unlock_scroll();
        self.chrome.set_nav_hidden(false);
    }
}

pub const NAVBAR_ID: &str = "navbar";

/// `PageChrome` backed by the live document.
pub struct DomChrome {
    dialog: NodeRef,
}

impl DomChrome {
    pub fn new(dialog: NodeRef) -> Self {
        Self { dialog }
    }

    fn body() -> Option<HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

impl PageChrome for DomChrome {
    fn lock_scroll(&self) {
        if let Some(body) = Self::body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn unlock_scroll(&self) {
        if let Some(body) = Self::body() {
            let _ = body.style().remove_property("overflow");
        }
    }

    fn set_nav_hidden(&self, hidden: bool) {
        let navbar = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(NAVBAR_ID));
        if let Some(navbar) = navbar {
            let classes = navbar.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    fn focus_dialog(&self) {
        if let Some(dialog) = self.dialog.cast::<HtmlElement>() {
            let _ = dialog.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingChrome {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl PageChrome for RecordingChrome {
        fn lock_scroll(&self) {
            self.log.borrow_mut().push("lock");
        }
        fn unlock_scroll(&self) {
            self.log.borrow_mut().push("unlock");
        }
        fn set_nav_hidden(&self, hidden: bool) {
            self.log.borrow_mut().push(if hidden { "hide-nav" } else { "show-nav" });
        }
        fn focus_dialog(&self) {
            self.log.borrow_mut().push("focus");
        }
    }

    #[test]
    fn test_acquire_and_release() {
        let chrome = RecordingChrome::default();
        let log = chrome.log.clone();

        let session = ModalSession::acquire(chrome);
        session.focus();
        assert_eq!(*log.borrow(), vec!["lock", "hide-nav", "focus"]);

        drop(session);
        assert_eq!(
            *log.borrow(),
            vec!["lock", "hide-nav", "focus", "unlock", "show-nav"]
        );
    }

    #[test]
    fn test_release_when_owner_is_replaced() {
        let chrome = RecordingChrome::default();
        let log = chrome.log.clone();

        let mut slot = Some(ModalSession::acquire(chrome));
        assert!(slot.is_some());
        slot = None;
        assert!(slot.is_none());
        assert_eq!(log.borrow().last(), Some(&"show-nav"));
    }
}
