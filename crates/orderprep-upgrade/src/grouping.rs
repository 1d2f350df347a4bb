//! Attaching member concepts to a set concept.

use chrono::Utc;

use orderprep_core::errors::{StorageError, UpgradeResult};
use orderprep_core::models::{Concept, ConceptSetMember};
use orderprep_core::traits::{IConceptStore, IUserContext};

/// Append `member` to `set` with `sort_weight`, save the set and return it
/// reloaded from the store.
///
/// Returns `Ok(None)` when any input is absent or the member has not been
/// saved yet. Memberships are not deduplicated: attaching the same member
/// twice yields two memberships.
pub fn attach_member(
    store: &dyn IConceptStore,
    context: &dyn IUserContext,
    set: Option<Concept>,
    member: Option<&Concept>,
    sort_weight: Option<f64>,
) -> UpgradeResult<Option<Concept>> {
    let (Some(mut set), Some(member), Some(sort_weight)) = (set, member, sort_weight) else {
        return Ok(None);
    };
    let Some(member_id) = member.concept_id else {
        tracing::debug!(uuid = %member.uuid, "member concept has no id, not attaching");
        return Ok(None);
    };

    let mut membership = ConceptSetMember::new(member_id, sort_weight);
    membership.creator = context.authenticated_user().map(|u| u.user_id);
    membership.date_created = Utc::now();
    set.set_members.push(membership);

    let saved = store.save_concept(&set)?;
    let Some(set_id) = saved.concept_id else {
        return Ok(Some(saved));
    };
    let reloaded = store
        .get_concept(set_id)?
        .ok_or_else(|| StorageError::NotFound {
            entity: "concept",
            id: set_id.to_string(),
        })?;
    Ok(Some(reloaded))
}
