//! Identity-provider boundary.
//!
//! Sign-in is out-of-band (email magic link, owned entirely by the
//! provider's client library). The core only ever sees whether a user is
//! signed in plus presentation fields, and tracks the send flow so the UI
//! can disable the submit control while a link is in flight. No
//! authorization decisions happen here.

use serde::{Deserialize, Serialize};

/// What the core knows about the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionInfo {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SessionInfo {
    pub fn anonymous() -> SessionInfo {
        SessionInfo::default()
    }

    pub fn signed_in_as(email: impl Into<String>, display_name: Option<String>) -> SessionInfo {
        SessionInfo {
            signed_in: true,
            email: Some(email.into()),
            display_name,
        }
    }

    /// Name to present in the header: display name, else email, else none.
    pub fn presentation_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .filter(|_| self.signed_in)
    }
}

/// Magic-link send flow. Failure resets to `Idle`; the sending flag is
/// cleared and no error message is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MagicLinkFlow {
    #[default]
    Idle,
    Sending,
    LinkSent,
}

impl MagicLinkFlow {
    /// Begin a send. Only valid from `Idle`; returns whether the transition
    /// happened (double-submits while sending are ignored).
    pub fn begin_send(&mut self) -> bool {
        if *self == MagicLinkFlow::Idle {
            *self = MagicLinkFlow::Sending;
            true
        } else {
            false
        }
    }

    /// Record the provider's fire-and-forget outcome.
    pub fn finish_send(&mut self, succeeded: bool) {
        if *self == MagicLinkFlow::Sending {
            *self = if succeeded {
                MagicLinkFlow::LinkSent
            } else {
                MagicLinkFlow::Idle
            };
        }
    }

    pub fn is_sending(&self) -> bool {
        *self == MagicLinkFlow::Sending
    }
}
