use pagebloc_defaults::default_layout;
use pagebloc_model::{ComponentConfig, Layout};
use pagebloc_store::{PageStore, StoreError};
use pagebloc_types::PageKind;

fn store() -> PageStore {
    PageStore::open_in_memory().unwrap()
}

// ── Provisioning ─────────────────────────────────────────────────

#[test]
fn provisioning_creates_all_four_pages() {
    let store = store();
    let shop = store.provision_shop("alice@example.com", "Alice's Shop").unwrap();
    assert_eq!(store.page_kinds(shop).unwrap(), PageKind::ALL.to_vec());
}

#[test]
fn provisioned_pages_carry_default_content() {
    let store = store();
    let shop = store.provision_shop("alice@example.com", "Alice's Shop").unwrap();
    for kind in PageKind::ALL {
        let page = store.get_page(shop, kind).unwrap();
        assert!(
            page.layout.content_eq(&default_layout(kind)),
            "{kind} page does not match the canonical default"
        );
    }
}

#[test]
fn one_shop_per_owner() {
    let store = store();
    store.provision_shop("alice@example.com", "First").unwrap();
    let err = store.provision_shop("alice@example.com", "Second").unwrap_err();
    assert!(matches!(err, StoreError::OwnerHasShop(_)));
}

#[test]
fn failed_provisioning_leaves_nothing_behind() {
    let store = store();
    store.provision_shop("alice@example.com", "First").unwrap();
    let _ = store.provision_shop("alice@example.com", "Second");
    // The rejected second attempt must not have written a shop or pages.
    let shop = store.shop_for_owner("alice@example.com").unwrap().unwrap();
    assert_eq!(store.page_kinds(shop).unwrap().len(), 4);
}

// ── Owner resolution ─────────────────────────────────────────────

#[test]
fn owner_resolution_round_trips() {
    let store = store();
    let shop = store.provision_shop("bob@example.com", "Bob's Shop").unwrap();
    assert_eq!(store.shop_for_owner("bob@example.com").unwrap(), Some(shop));
    assert_eq!(store.shop_for_owner("nobody@example.com").unwrap(), None);
}

// ── Layout replacement ───────────────────────────────────────────

#[test]
fn set_layout_fully_replaces() {
    let store = store();
    let shop = store.provision_shop("carol@example.com", "Carol's Shop").unwrap();

    let new_layout = Layout::from_entries(vec![
        ComponentConfig::new("heading", "page").with_setting("text", "Just a heading"),
    ]);
    store.set_layout(shop, PageKind::Home, &new_layout).unwrap();

    let page = store.get_page(shop, PageKind::Home).unwrap();
    assert_eq!(page.layout, new_layout);
}

#[test]
fn set_layout_bumps_updated_at_and_keeps_created_at() {
    let store = store();
    let shop = store.provision_shop("carol@example.com", "Carol's Shop").unwrap();
    let before = store.get_page(shop, PageKind::Home).unwrap();

    let page = store
        .set_layout(shop, PageKind::Home, &Layout::new())
        .unwrap();
    assert_eq!(page.created_at, before.created_at);
    assert!(page.updated_at >= before.updated_at);
}

#[test]
fn empty_layout_is_a_valid_persisted_state() {
    let store = store();
    let shop = store.provision_shop("dave@example.com", "Dave's Shop").unwrap();
    store.set_layout(shop, PageKind::Contact, &Layout::new()).unwrap();
    let page = store.get_page(shop, PageKind::Contact).unwrap();
    assert!(page.layout.is_empty());
}

#[test]
fn schema_invalid_settings_persist_verbatim() {
    // Saving in-progress, schema-invalid work is allowed by design; the
    // store must reflect it back untouched.
    let store = store();
    let shop = store.provision_shop("erin@example.com", "Erin's Shop").unwrap();

    let half_done = Layout::from_entries(vec![ComponentConfig::new("image", "inset")
        .with_setting("url", "not-a-url-yet")
        .with_setting("draft_note", "still picking a photo")]);
    store.set_layout(shop, PageKind::Home, &half_done).unwrap();

    let page = store.get_page(shop, PageKind::Home).unwrap();
    assert_eq!(page.layout, half_done);
}

#[test]
fn set_layout_on_missing_page_reports_not_found() {
    let store = store();
    let shop = store.provision_shop("fay@example.com", "Fay's Shop").unwrap();
    store.delete_shop(shop).unwrap();

    let err = store
        .set_layout(shop, PageKind::Home, &Layout::new())
        .unwrap_err();
    assert!(matches!(err, StoreError::PageNotFound { .. }));
}

// ── Isolation ────────────────────────────────────────────────────

#[test]
fn shops_cannot_see_each_others_pages() {
    let store = store();
    let shop_a = store.provision_shop("a@example.com", "A").unwrap();
    let shop_b = store.provision_shop("b@example.com", "B").unwrap();

    let marker = Layout::from_entries(vec![
        ComponentConfig::new("heading", "page").with_setting("text", "A only"),
    ]);
    store.set_layout(shop_a, PageKind::Home, &marker).unwrap();

    let page_b = store.get_page(shop_b, PageKind::Home).unwrap();
    assert!(!page_b.layout.content_eq(&marker));
}

// ── Cascade delete ───────────────────────────────────────────────

#[test]
fn deleting_a_shop_cascades_to_its_pages() {
    let store = store();
    let shop = store.provision_shop("gwen@example.com", "Gwen's Shop").unwrap();
    store.delete_shop(shop).unwrap();

    let err = store.get_page(shop, PageKind::Home).unwrap_err();
    assert!(matches!(err, StoreError::PageNotFound { .. }));
    assert!(store.page_kinds(shop).unwrap().is_empty());
}

#[test]
fn deleting_an_unknown_shop_fails() {
    let store = store();
    let err = store.delete_shop(pagebloc_types::ShopId::new()).unwrap_err();
    assert!(matches!(err, StoreError::ShopNotFound(_)));
}

// ── Durability across reopen ─────────────────────────────────────

#[test]
fn layouts_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pagebloc.db");

    let shop = {
        let store = PageStore::open(&path).unwrap();
        store.provision_shop("hal@example.com", "Hal's Shop").unwrap()
    };

    let store = PageStore::open(&path).unwrap();
    let page = store.get_page(shop, PageKind::Catalog).unwrap();
    assert!(page.layout.content_eq(&default_layout(PageKind::Catalog)));
}
