//! Namespace switching and per-namespace size persistence.

use crate::list::{DynamicList, ListOptions, DEFAULT_ROW_SIZE};
use crate::model::{Nonce, RowKey};
use crate::store::{SharedSizeStore, SizeStore, StyleCache};
use crate::window::Viewport;
use std::rc::Rc;

fn items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("entry-{i}")).collect()
}

fn list_on(store: &SharedSizeStore, nonce: &str) -> DynamicList<String, ()> {
    let options = ListOptions::new(
        Viewport::new(100.0, 400.0),
        Nonce::new(nonce),
        |index, items: &[String]| RowKey::new(items[index].clone()),
        (),
    );
    DynamicList::new(options, items(100), Rc::clone(store), StyleCache::shared())
}

#[test]
fn switching_away_and_back_restores_the_exact_table() {
    let store = SizeStore::shared();
    let mut list = list_on(&store, "a");

    list.set_size(RowKey::new("entry-0"), 12.0);
    list.set_size(RowKey::new("entry-1"), 34.0);
    let snapshot = list.size_table().clone();

    list.set_nonce(Nonce::new("b"));
    list.set_size(RowKey::new("entry-0"), 70.0); // belongs to "b" only
    list.set_nonce(Nonce::new("a"));

    assert!(list.size_table().shares_snapshot_with(&snapshot));
    assert_eq!(list.get_size(0), 12.0);
    assert_eq!(list.get_size(1), 34.0);
}

#[test]
fn remounted_instance_restores_sizes_from_shared_store() {
    let store = SizeStore::shared();

    {
        let mut first = list_on(&store, "sessions");
        first.set_size(RowKey::new("entry-3"), 90.0);
    } // instance dropped - its measurements outlive it in the store

    let second = list_on(&store, "sessions");
    assert_eq!(second.get_size(3), 90.0);
    assert_eq!(second.estimated_size(), 90.0);
}

#[test]
fn isolated_stores_do_not_leak_measurements() {
    let store_a = SizeStore::shared();
    let store_b = SizeStore::shared();

    let mut on_a = list_on(&store_a, "same-nonce");
    on_a.set_size(RowKey::new("entry-0"), 77.0);

    let on_b = list_on(&store_b, "same-nonce");
    assert_eq!(on_b.get_size(0), DEFAULT_ROW_SIZE);
}

#[test]
fn unseen_namespace_starts_from_an_empty_table() {
    let store = SizeStore::shared();
    let mut list = list_on(&store, "a");
    list.set_size(RowKey::new("entry-0"), 55.0);

    list.set_nonce(Nonce::new("never-seen"));
    assert!(list.size_table().is_empty());
    assert_eq!(list.estimated_size(), DEFAULT_ROW_SIZE);
}

#[test]
fn table_restored_on_switch_ignores_later_writes_to_other_namespace() {
    let store = SizeStore::shared();
    let mut list = list_on(&store, "a");
    list.set_size(RowKey::new("entry-0"), 10.0);

    list.set_nonce(Nonce::new("b"));
    list.set_size(RowKey::new("entry-0"), 20.0);
    list.set_size(RowKey::new("entry-1"), 30.0);

    list.set_nonce(Nonce::new("a"));
    assert_eq!(list.get_size(0), 10.0);
    assert_eq!(list.size_table().len(), 1);
}

#[test]
fn render_after_switch_starts_from_the_first_row() {
    let store = SizeStore::shared();
    let mut list = list_on(&store, "a");

    list.scroll_to(60);
    let range = list.render().range.unwrap();
    assert!(range.visible_start > 0);

    list.set_nonce(Nonce::new("b"));
    let range = list.render().range.unwrap();
    assert_eq!(range.visible_start, 0);
    assert_eq!(list.scroll_offset(), 0.0);
}
