use crate::controls::contact::ContactSubmission;

/// Side effects requested by the event handler, performed by the main loop.
/// This is the seam where a real delivery backend would plug in.
#[derive(Debug)]
pub enum Action {
    /// Contact form was submitted; delivery is external to the state layer.
    SubmitContact(ContactSubmission),
    Quit,
}
