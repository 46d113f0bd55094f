//! Tests for the stall directory service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::error::ErrorCode;
use crate::domain::geo::GeoPoint;
use crate::domain::menu::{MenuItem, MenuItemId};
use crate::domain::ports::{
    MockMenuItemRepository, MockObjectStore, MockReviewRepository, MockStallRepository,
};
use crate::domain::review::{Rating, Review, ReviewId};
use crate::domain::stall::{Location, LocationPatch, StallPatch};
use crate::domain::user::Role;

type Service =
    StallService<MockStallRepository, MockMenuItemRepository, MockReviewRepository, MockObjectStore>;

fn make_service(
    stalls: MockStallRepository,
    menu_items: MockMenuItemRepository,
    reviews: MockReviewRepository,
    media: MockObjectStore,
) -> Service {
    StallService::new(
        Arc::new(stalls),
        Arc::new(menu_items),
        Arc::new(reviews),
        Arc::new(media),
    )
}

fn user(role: Role) -> User {
    let now = Utc::now();
    User {
        id: UserId::random(),
        email: "stallholder@example.test".to_owned(),
        full_name: "Stallholder".to_owned(),
        password_hash: "$argon2id$fixture".to_owned(),
        role,
        created_at: now,
        updated_at: now,
    }
}

fn stall_at(owner: &User, name: &str, latitude: f64, longitude: f64) -> Stall {
    let now = Utc::now();
    Stall {
        id: StallId::random(),
        owner_id: owner.id,
        name: name.to_owned(),
        description: "fixture stall".to_owned(),
        location: Location::new(latitude, longitude, "somewhere").expect("valid"),
        image_url: "http://media.test/stalls/fixture.jpg".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

fn image() -> ImageUpload {
    ImageUpload {
        bytes: vec![0xFF, 0xD8, 0xFF],
        content_type: "image/jpeg".to_owned(),
    }
}

#[tokio::test]
async fn create_stores_image_then_persists_stall() {
    let owner = user(Role::Owner);
    let owner_id = owner.id;

    let mut media = MockObjectStore::new();
    media
        .expect_store()
        .withf(move |_, content_type, prefix| {
            content_type == "image/jpeg" && *prefix == format!("stalls/{owner_id}")
        })
        .times(1)
        .return_once(|_, _, _| Ok("http://media.test/stalls/new.jpg".to_owned()));

    let mut stalls = MockStallRepository::new();
    stalls
        .expect_put()
        .withf(move |stall| {
            stall.owner_id == owner_id && stall.image_url == "http://media.test/stalls/new.jpg"
        })
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        media,
    );
    let stall = service
        .create(CreateStallRequest {
            actor: owner,
            name: "Satay Corner".to_owned(),
            description: "Charcoal satay".to_owned(),
            location: Location::new(1.3, 103.8, "Lau Pa Sat").expect("valid"),
            image: image(),
        })
        .await
        .expect("creation succeeds");

    assert_eq!(stall.name, "Satay Corner");
    assert_eq!(stall.created_at, stall.updated_at);
}

#[tokio::test]
async fn create_rejects_customers_without_touching_storage() {
    let service = make_service(
        MockStallRepository::new(),
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let error = service
        .create(CreateStallRequest {
            actor: user(Role::Customer),
            name: "No".to_owned(),
            description: "No".to_owned(),
            location: Location::new(0.0, 0.0, "nowhere").expect("valid"),
            image: image(),
        })
        .await
        .expect_err("customers cannot create stalls");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn list_without_center_returns_storage_order_without_distances() {
    let owner = user(Role::Owner);
    let first = stall_at(&owner, "first", 1.30, 103.80);
    let second = stall_at(&owner, "second", 1.31, 103.81);

    let mut stalls = MockStallRepository::new();
    let rows = vec![first.clone(), second.clone()];
    stalls
        .expect_list_all()
        .times(1)
        .return_once(move || Ok(rows));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let listed = service.list(StallQuery::default()).await.expect("list");

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].stall.id, first.id);
    assert_eq!(listed[1].stall.id, second.id);
    assert!(listed.iter().all(|entry| entry.distance_km.is_none()));
}

#[tokio::test]
async fn list_with_center_filters_sorts_and_annotates() {
    let owner = user(Role::Owner);
    // Roughly 0, 1.1 and 222 km east of the centre.
    let near = stall_at(&owner, "near", 0.0, 0.0);
    let close = stall_at(&owner, "close", 0.0, 0.01);
    let far = stall_at(&owner, "far", 0.0, 2.0);

    let mut stalls = MockStallRepository::new();
    let rows = vec![far.clone(), close.clone(), near.clone()];
    stalls
        .expect_list_all()
        .times(1)
        .return_once(move || Ok(rows));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let listed = service
        .list(StallQuery {
            center: Some(GeoPoint::new(0.0, 0.0).expect("valid")),
            radius_km: None,
        })
        .await
        .expect("list");

    // Default 5 km radius drops the far stall and orders by distance.
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].stall.id, near.id);
    assert_eq!(listed[1].stall.id, close.id);
    assert_eq!(listed[0].distance_km, Some(0.0));
    assert!(listed[1].distance_km.expect("annotated") > 0.0);
}

#[tokio::test]
async fn list_with_zero_radius_still_includes_the_stall_at_the_center() {
    let owner = user(Role::Owner);
    let here = stall_at(&owner, "here", 1.3521, 103.8198);

    let mut stalls = MockStallRepository::new();
    let rows = vec![here.clone()];
    stalls
        .expect_list_all()
        .times(1)
        .return_once(move || Ok(rows));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let listed = service
        .list(StallQuery {
            center: Some(here.location.point()),
            radius_km: Some(0.0),
        })
        .await
        .expect("list");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].distance_km, Some(0.0));
}

#[tokio::test]
async fn equidistant_stalls_keep_storage_order() {
    let owner = user(Role::Owner);
    // Same offset east and west of the centre: identical distances.
    let east = stall_at(&owner, "east", 0.0, 0.01);
    let west = stall_at(&owner, "west", 0.0, -0.01);

    let mut stalls = MockStallRepository::new();
    let rows = vec![east.clone(), west.clone()];
    stalls
        .expect_list_all()
        .times(1)
        .return_once(move || Ok(rows));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let listed = service
        .list(StallQuery {
            center: Some(GeoPoint::new(0.0, 0.0).expect("valid")),
            radius_km: Some(5.0),
        })
        .await
        .expect("list");

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].stall.id, east.id);
    assert_eq!(listed[1].stall.id, west.id);
}

#[tokio::test]
async fn get_returns_not_found_for_missing_stall() {
    let mut stalls = MockStallRepository::new();
    stalls
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let error = service
        .get(&StallId::random())
        .await
        .expect_err("missing stall");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn update_merges_partial_location() {
    let owner = user(Role::Owner);
    let stall = stall_at(&owner, "movable", 1.30, 103.80);
    let stall_id = stall.id;

    let mut stalls = MockStallRepository::new();
    let stored = stall.clone();
    stalls
        .expect_find_by_id()
        .with(eq(stall_id))
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    stalls
        .expect_put()
        .withf(move |updated| {
            updated.location.latitude == 1.35
                && updated.location.longitude == 103.80
                && updated.location.address == "somewhere"
        })
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let updated = service
        .update(UpdateStallRequest {
            actor: owner,
            stall_id,
            patch: StallPatch {
                location: LocationPatch {
                    latitude: Some(1.35),
                    ..LocationPatch::default()
                },
                ..StallPatch::default()
            },
            image: None,
        })
        .await
        .expect("update succeeds");

    assert_eq!(updated.location.longitude, stall.location.longitude);
    assert_eq!(updated.location.address, stall.location.address);
    assert!(updated.updated_at >= stall.updated_at);
}

#[tokio::test]
async fn update_by_foreign_owner_is_forbidden_and_writes_nothing() {
    let owner = user(Role::Owner);
    let intruder = user(Role::Owner);
    let stall = stall_at(&owner, "target", 1.30, 103.80);
    let stall_id = stall.id;

    let mut stalls = MockStallRepository::new();
    stalls
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stall)));
    // No expect_put: a write would panic the mock.

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let error = service
        .update(UpdateStallRequest {
            actor: intruder,
            stall_id,
            patch: StallPatch {
                name: Some("mine now".to_owned()),
                ..StallPatch::default()
            },
            image: None,
        })
        .await
        .expect_err("foreign owner");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[case(120.0, None)]
#[case(0.0, Some(-200.0))]
#[tokio::test]
async fn update_rejects_out_of_range_merged_location(
    #[case] latitude: f64,
    #[case] longitude: Option<f64>,
) {
    let owner = user(Role::Owner);
    let stall = stall_at(&owner, "fixed", 1.30, 103.80);
    let stall_id = stall.id;

    let mut stalls = MockStallRepository::new();
    stalls
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stall)));

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let error = service
        .update(UpdateStallRequest {
            actor: owner,
            stall_id,
            patch: StallPatch {
                location: LocationPatch {
                    latitude: Some(latitude),
                    longitude,
                    address: None,
                },
                ..StallPatch::default()
            },
            image: None,
        })
        .await
        .expect_err("invalid location");
    assert_eq!(error.code(), ErrorCode::InvalidInput);
}

#[tokio::test]
async fn delete_cascades_to_menu_items_and_reviews() {
    let owner = user(Role::Owner);
    let customer = user(Role::Customer);
    let stall = stall_at(&owner, "doomed", 1.30, 103.80);
    let stall_id = stall.id;
    let now = Utc::now();

    let item = MenuItem {
        id: MenuItemId::random(),
        stall_id,
        name: "Laksa".to_owned(),
        price: 5.0,
        description: "Spicy".to_owned(),
        category: "noodles".to_owned(),
        image_url: "http://media.test/menu/laksa.jpg".to_owned(),
        created_at: now,
        updated_at: now,
    };
    let review = Review {
        id: ReviewId::random(),
        stall_id,
        author_id: customer.id,
        author_name: customer.full_name.clone(),
        rating: Rating::new(5).expect("valid"),
        comment: "Shiok".to_owned(),
        created_at: now,
        updated_at: now,
    };

    let mut stalls = MockStallRepository::new();
    let stored = stall.clone();
    stalls
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    stalls
        .expect_delete()
        .with(eq(stall_id))
        .times(1)
        .return_once(|_| Ok(()));

    let mut menu_items = MockMenuItemRepository::new();
    let item_id = item.id;
    let items = vec![item];
    menu_items
        .expect_list_by_stall()
        .times(1)
        .return_once(move |_, _| Ok(items));
    menu_items
        .expect_delete()
        .with(eq(item_id))
        .times(1)
        .return_once(|_| Ok(()));

    let mut reviews = MockReviewRepository::new();
    let review_id = review.id;
    let rows = vec![review];
    reviews
        .expect_list_by_stall()
        .times(1)
        .return_once(move |_| Ok(rows));
    reviews
        .expect_delete()
        .with(eq(review_id))
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(stalls, menu_items, reviews, MockObjectStore::new());
    service
        .delete(&owner, &stall_id)
        .await
        .expect("cascade succeeds");
}

#[tokio::test]
async fn delete_by_foreign_owner_leaves_everything_in_place() {
    let owner = user(Role::Owner);
    let intruder = user(Role::Owner);
    let stall = stall_at(&owner, "safe", 1.30, 103.80);
    let stall_id = stall.id;

    let mut stalls = MockStallRepository::new();
    stalls
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stall)));
    // No delete expectations anywhere: any cascade call would panic.

    let service = make_service(
        stalls,
        MockMenuItemRepository::new(),
        MockReviewRepository::new(),
        MockObjectStore::new(),
    );
    let error = service
        .delete(&intruder, &stall_id)
        .await
        .expect_err("foreign owner");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}
