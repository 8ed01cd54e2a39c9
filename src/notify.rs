//! User notification channel.
//!
//! The wrapper talks to the user through a [`Notifier`] capability rather than
//! calling platform dialog APIs directly, which keeps the orchestration logic
//! free of UI code and lets tests substitute a recorder. Two implementations
//! exist, selected by the `silentMode` config flag:
//!
//! - [`DialogNotifier`]: a native message box titled "Map2Dif Wrapper"
//! - [`StdoutNotifier`]: one line on standard output
//!
//! Every notification is also recorded to the tracing sink regardless of mode.

use crate::DIALOG_TITLE;

/// Capability for delivering a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shows messages in a native dialog box. Used when silent mode is off.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);

        rfd::MessageDialog::new()
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_level(rfd::MessageLevel::Info)
            .show();
    }
}

/// Writes messages as plain lines on standard output. Used in silent mode and
/// before the config (and therefore the silent flag) is readable.
#[derive(Debug, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
        println!("{}", message);
    }
}

/// Select the notifier implementation for the given silent-mode flag.
pub fn for_mode(silent: bool) -> Box<dyn Notifier> {
    if silent {
        Box::new(StdoutNotifier)
    } else {
        Box::new(DialogNotifier)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Notifier;
    use std::cell::RefCell;

    /// Records every message for assertion in tests.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }
}
