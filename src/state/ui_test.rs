use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut queue = ToastQueue::default();
    let first = queue.success("saved");
    let second = queue.info("on the roadmap");
    assert!(second > first);
    assert_eq!(queue.notes().len(), 2);
    assert_eq!(queue.notes()[0].message, "saved");
    assert_eq!(queue.notes()[0].kind, ToastKind::Success);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut queue = ToastQueue::default();
    let first = queue.success("a");
    let second = queue.error("b");

    queue.dismiss(first);
    assert_eq!(queue.notes().len(), 1);
    assert_eq!(queue.notes()[0].id, second);

    queue.dismiss(999);
    assert_eq!(queue.notes().len(), 1);
}

#[test]
fn stack_depth_is_capped_dropping_the_oldest() {
    let mut queue = ToastQueue::default();
    for n in 0..TOAST_CAP + 2 {
        queue.info(format!("note {n}"));
    }
    assert_eq!(queue.notes().len(), TOAST_CAP);
    assert_eq!(queue.notes()[0].message, "note 2");
}

#[test]
fn ids_stay_unique_after_a_cap_eviction() {
    let mut queue = ToastQueue::default();
    for n in 0..TOAST_CAP + 3 {
        queue.info(format!("note {n}"));
    }
    let fresh = queue.success("fresh");
    assert!(queue.notes().iter().filter(|note| note.id == fresh).count() == 1);
    assert!(queue.notes().iter().all(|note| note.id <= fresh));
}
