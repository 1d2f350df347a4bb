//! Attaching members to sets: defensive no-ops and non-deduplicating append.

use orderprep_core::models::User;
use orderprep_core::traits::{IConceptStore, StaticUserContext};
use orderprep_storage::StorageEngine;
use orderprep_upgrade::{attach_member, ConceptResolver};

fn context() -> StaticUserContext {
    StaticUserContext::new(
        Some(User {
            user_id: 1,
            username: "admin".to_string(),
        }),
        "en",
    )
}

#[test]
fn absent_inputs_are_no_ops() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let ctx = context();
    let resolver = ConceptResolver::new(&engine, &ctx);
    let set = resolver.resolve("SET", Some("set"), true).unwrap();
    let member = resolver.resolve("mg", None, false).unwrap();

    assert!(attach_member(&engine, &ctx, None, Some(&member), Some(0.0)).unwrap().is_none());
    assert!(attach_member(&engine, &ctx, Some(set.clone()), None, Some(0.0)).unwrap().is_none());
    assert!(attach_member(&engine, &ctx, Some(set), Some(&member), None).unwrap().is_none());

    let stored = engine.get_concept_by_uuid("set").unwrap().unwrap();
    assert!(stored.set_members.is_empty());
}

#[test]
fn unsaved_member_is_not_attached() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let ctx = context();
    let resolver = ConceptResolver::new(&engine, &ctx);
    let set = resolver.resolve("SET", Some("set"), true).unwrap();
    let mut member = resolver.resolve("mg", None, false).unwrap();
    member.concept_id = None;

    assert!(attach_member(&engine, &ctx, Some(set), Some(&member), Some(0.0)).unwrap().is_none());
}

#[test]
fn attach_returns_reloaded_set_with_membership() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let ctx = context();
    let resolver = ConceptResolver::new(&engine, &ctx);
    let set = resolver.resolve("SET", Some("set"), true).unwrap();
    let member = resolver.resolve("mg", None, false).unwrap();

    let updated = attach_member(&engine, &ctx, Some(set), Some(&member), Some(0.0))
        .unwrap()
        .unwrap();
    assert_eq!(updated.member_ids(), vec![member.concept_id.unwrap()]);
    let membership = &updated.set_members[0];
    assert!(membership.id.is_some());
    assert_eq!(membership.sort_weight, 0.0);
    assert_eq!(membership.creator, Some(1));
}

#[test]
fn attaching_twice_creates_two_memberships() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let ctx = context();
    let resolver = ConceptResolver::new(&engine, &ctx);
    let set = resolver.resolve("SET", Some("set"), true).unwrap();
    let member = resolver.resolve("mg", None, false).unwrap();
    let member_id = member.concept_id.unwrap();

    let set = attach_member(&engine, &ctx, Some(set), Some(&member), Some(0.0))
        .unwrap()
        .unwrap();
    let set = attach_member(&engine, &ctx, Some(set), Some(&member), Some(0.0))
        .unwrap()
        .unwrap();
    assert_eq!(set.member_ids(), vec![member_id, member_id]);
}
