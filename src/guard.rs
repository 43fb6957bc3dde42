/// Click interception logic, independent of the browser
use crate::options::ConfirmMessage;

/// A blocking yes/no prompt shown to the user
pub trait Prompt {
    /// Show `message` and block until the user answers. `true` means accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// The parts of a click event the guard needs to abort it
pub trait Cancelable {
    fn prevent_default(&self);
    fn stop_immediate_propagation(&self);
}

/// Outcome of one intercepted click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Declined,
}

impl Decision {
    pub fn is_accepted(self) -> bool {
        matches!(self, Decision::Accepted)
    }
}

/// Holds the message captured for one binding and decides each click
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmGuard {
    message: ConfirmMessage,
}

impl ConfirmGuard {
    pub fn new(message: Option<String>) -> ConfirmGuard {
        ConfirmGuard {
            message: ConfirmMessage::resolve(message),
        }
    }

    pub fn message(&self) -> &ConfirmMessage {
        &self.message
    }

    /// Prompt once for this click. On decline the event's default action is
    /// prevented and no further listeners see it.
    pub fn intercept<P, E>(&self, prompt: &P, event: &E) -> Decision
    where
        P: Prompt + ?Sized,
        E: Cancelable + ?Sized,
    {
        if prompt.confirm(self.message.as_str()) {
            log::debug!("confirm accepted: {}", self.message);
            Decision::Accepted
        } else {
            log::debug!("confirm declined: {}", self.message);
            event.prevent_default();
            event.stop_immediate_propagation();
            Decision::Declined
        }
    }
}

impl From<ConfirmMessage> for ConfirmGuard {
    fn from(message: ConfirmMessage) -> Self {
        ConfirmGuard { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct ScriptedPrompt {
        answer: bool,
        shown: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> ScriptedPrompt {
            ScriptedPrompt {
                answer,
                shown: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.shown.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    #[derive(Default)]
    struct FakeClick {
        default_prevented: Cell<bool>,
        propagation_stopped: Cell<bool>,
    }

    impl Cancelable for FakeClick {
        fn prevent_default(&self) {
            self.default_prevented.set(true);
        }

        fn stop_immediate_propagation(&self) {
            self.propagation_stopped.set(true);
        }
    }

    /// Dispatch a click through the guard the way a host would, returning
    /// how many times the default action ran.
    fn simulate_click(guard: &ConfirmGuard, prompt: &ScriptedPrompt) -> (Decision, FakeClick, u32) {
        let click = FakeClick::default();
        let decision = guard.intercept(prompt, &click);
        let default_actions = if click.default_prevented.get() { 0 } else { 1 };
        (decision, click, default_actions)
    }

    #[test]
    fn test_decline_without_message_blocks_default_action() {
        let guard = ConfirmGuard::new(None);
        let prompt = ScriptedPrompt::answering(false);

        let (decision, click, default_actions) = simulate_click(&guard, &prompt);

        assert_eq!(decision, Decision::Declined);
        assert_eq!(default_actions, 0);
        assert!(click.propagation_stopped.get());
        assert_eq!(*prompt.shown.borrow(), vec!["Are you sure?".to_string()]);
    }

    #[test]
    fn test_accept_with_message_runs_default_action_once() {
        let guard = ConfirmGuard::new(Some("Delete this item?".to_string()));
        let prompt = ScriptedPrompt::answering(true);

        let (decision, click, default_actions) = simulate_click(&guard, &prompt);

        assert!(decision.is_accepted());
        assert_eq!(default_actions, 1);
        assert!(!click.propagation_stopped.get());
        assert_eq!(*prompt.shown.borrow(), vec!["Delete this item?".to_string()]);
    }

    #[test]
    fn test_message_is_reused_for_every_click() {
        let guard = ConfirmGuard::new(Some("Discard draft?".to_string()));
        let prompt = ScriptedPrompt::answering(true);

        for _ in 0..3 {
            simulate_click(&guard, &prompt);
        }

        let shown = prompt.shown.borrow();
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|m| m == "Discard draft?"));
    }

    #[test]
    fn test_default_message_does_not_leak_between_guards() {
        let defaulted = ConfirmGuard::new(None);
        let custom = ConfirmGuard::new(Some("Send now?".to_string()));
        let prompt = ScriptedPrompt::answering(false);

        simulate_click(&custom, &prompt);
        simulate_click(&defaulted, &prompt);
        simulate_click(&custom, &prompt);

        assert_eq!(
            *prompt.shown.borrow(),
            vec!["Send now?", "Are you sure?", "Send now?"]
        );
    }

    #[test]
    fn test_answers_are_independent_per_click() {
        let guard = ConfirmGuard::default();

        let (first, _, first_actions) = simulate_click(&guard, &ScriptedPrompt::answering(false));
        let (second, _, second_actions) = simulate_click(&guard, &ScriptedPrompt::answering(true));

        assert_eq!(first, Decision::Declined);
        assert_eq!(first_actions, 0);
        assert_eq!(second, Decision::Accepted);
        assert_eq!(second_actions, 1);
    }
}
