use domain_shared::slack::UserId;
use std::collections::BTreeSet;
use tracing::instrument;

/// The invites and kicks that turn the current member set into the
/// target one.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MembershipDiff {
    pub to_invite: Vec<UserId>,
    pub to_kick: Vec<UserId>,
}

impl MembershipDiff {
    #[instrument(level = "trace", skip_all)]
    pub fn between(
        current: impl IntoIterator<Item = UserId>,
        target: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let current: BTreeSet<UserId> = current.into_iter().collect();
        let target: BTreeSet<UserId> = target.into_iter().collect();

        Self {
            to_invite: target.difference(&current).cloned().collect(),
            to_kick: current.difference(&target).cloned().collect(),
        }
    }

    /// Drops `user_id` from the kicks. Returns whether it was there.
    pub fn spare(&mut self, user_id: &UserId) -> bool {
        let before = self.to_kick.len();
        self.to_kick.retain(|kicked| kicked != user_id);
        before != self.to_kick.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_invite.is_empty() && self.to_kick.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<UserId> {
        ids.iter().map(|id| UserId(id.to_string())).collect()
    }

    #[test]
    fn invites_missing_and_kicks_extra_members() {
        let diff = MembershipDiff::between(ids(&["A", "B", "C"]), ids(&["B", "C", "D"]));

        assert_eq!(diff.to_invite, ids(&["D"]));
        assert_eq!(diff.to_kick, ids(&["A"]));
    }

    #[test]
    fn same_sets_need_nothing() {
        let diff = MembershipDiff::between(ids(&["A", "B"]), ids(&["B", "A", "A"]));

        assert!(diff.is_empty());
    }

    #[test]
    fn invites_and_kicks_never_overlap() {
        let current = ids(&["A", "B", "C", "E"]);
        let targets = [
            ids(&[]),
            ids(&["A"]),
            ids(&["B", "D", "F"]),
            ids(&["A", "B", "C", "E"]),
            ids(&["X", "Y", "Z", "C", "C"]),
        ];

        for target in targets {
            let diff = MembershipDiff::between(current.clone(), target.clone());
            for invited in &diff.to_invite {
                assert!(!diff.to_kick.contains(invited));
                assert!(target.contains(invited) && !current.contains(invited));
            }
            for kicked in &diff.to_kick {
                assert!(current.contains(kicked) && !target.contains(kicked));
            }
        }
    }

    #[test]
    fn spares_given_member() {
        let mut diff = MembershipDiff::between(ids(&["BOT", "A"]), ids(&[]));

        assert!(diff.spare(&UserId("BOT".into())));
        assert!(!diff.spare(&UserId("BOT".into())));
        assert_eq!(diff.to_kick, ids(&["A"]));
    }
}
