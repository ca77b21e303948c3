//! Campaign status lifecycle rules
//!
//! The transition table is the single source of truth for which status
//! moves the UI may offer. Persisting the chosen status is the backend's
//! job; this module only answers "where can we go from here".
//!
//! `Completed` is the sole terminal state. `Rejected` and `Cancelled` both
//! loop back to `Draft`, so the lifecycle graph is cyclic.

use crate::types::CampaignStatus;
use tracing::debug;

impl CampaignStatus {
    /// Legal next states from this one
    pub fn legal_transitions(self) -> &'static [CampaignStatus] {
        use crate::types::CampaignStatus::*;
        match self {
            Draft => &[PendingApproval, Cancelled],
            PendingApproval => &[Active, Rejected, Cancelled],
            Active => &[Paused, Completed, Cancelled],
            Paused => &[Active, Completed, Cancelled],
            Completed => &[],
            Rejected => &[Draft],
            Cancelled => &[Draft],
        }
    }

    pub fn can_transition_to(self, next: CampaignStatus) -> bool {
        self.legal_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.legal_transitions().is_empty()
    }
}

/// Legal next states for a raw wire label
///
/// Unrecognized labels get the empty slice, treating unknown states as
/// terminal rather than failing.
pub fn legal_transitions_for(label: &str) -> &'static [CampaignStatus] {
    match CampaignStatus::from_str(label) {
        Some(status) => status.legal_transitions(),
        None => {
            debug!(label, "unknown campaign status, returning no transitions");
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CampaignStatus::*;

    #[test]
    fn active_campaigns_can_pause_finish_or_cancel() {
        assert_eq!(Active.legal_transitions(), &[Paused, Completed, Cancelled]);
    }

    #[test]
    fn completed_is_the_only_terminal_state() {
        assert!(Completed.is_terminal());
        assert!(Completed.legal_transitions().is_empty());

        for status in [Draft, PendingApproval, Active, Paused, Rejected, Cancelled] {
            assert!(!status.is_terminal(), "{status} should not be terminal");
        }
    }

    #[test]
    fn rejected_and_cancelled_loop_back_to_draft() {
        assert_eq!(Rejected.legal_transitions(), &[Draft]);
        assert_eq!(Cancelled.legal_transitions(), &[Draft]);
    }

    #[test]
    fn every_listed_transition_is_accepted_and_no_other() {
        let all = [
            Draft,
            PendingApproval,
            Active,
            Paused,
            Completed,
            Rejected,
            Cancelled,
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition_to(to),
                    from.legal_transitions().contains(&to),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn draft_cannot_skip_approval() {
        assert!(!Draft.can_transition_to(Active));
        assert!(Draft.can_transition_to(PendingApproval));
    }

    #[test]
    fn wire_labels_resolve_case_insensitively() {
        assert_eq!(
            legal_transitions_for("ACTIVE"),
            &[Paused, Completed, Cancelled]
        );
        assert_eq!(legal_transitions_for("paused"), Paused.legal_transitions());
    }

    #[test]
    fn unknown_labels_get_no_transitions() {
        assert!(legal_transitions_for("ARCHIVED").is_empty());
        assert!(legal_transitions_for("").is_empty());
    }
}
