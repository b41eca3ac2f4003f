use yew::prelude::*;

/// Properties for the upload controller.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadProps {
    /// Resolved identity of the caller, if any. Checked synchronously at
    /// submit time; an absent identity is a precondition failure and no
    /// network request is issued.
    #[prop_or_default]
    pub user_email: Option<String>,
}
