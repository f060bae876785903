use crate::core::{Disposition, Feedback, Notice, Notifier, Resettable};

/// Every form on the page gets the same acknowledgement; nothing is sent anywhere.
pub fn handle_submit<F, N>(form: &F, feedback: &Feedback<'_, N>) -> Disposition
where
    F: Resettable,
    N: Notifier,
{
    feedback.show(&Notice::MessageReceived);
    form.reset();
    Disposition::PreventDefault
}
