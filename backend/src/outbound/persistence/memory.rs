//! In-memory persistence adapters.
//!
//! Each repository guards one `Vec`-backed table behind an async `RwLock`.
//! The vector preserves insertion order, which is what gives listings their
//! storage-order semantics, and every lookup is a linear scan, matching the
//! scan-with-filter contract of the ports. Mutations are atomic per record
//! (one lock acquisition); nothing coordinates across records, so cascades
//! remain a sequence of independent deletes.
//!
//! These adapters are the default server wiring and the workhorse of the
//! integration tests; a networked store slots in behind the same ports.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::menu::{MenuItem, MenuItemId};
use crate::domain::ports::{
    MenuItemRepository, MenuItemRepositoryError, ReviewRepository, ReviewRepositoryError,
    StallRepository, StallRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::review::{Review, ReviewId};
use crate::domain::stall::{Stall, StallId};
use crate::domain::user::{User, UserId};

/// In-memory [`UserRepository`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn put(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == user.id) {
            Some(row) => *row = user.clone(),
            None => rows.push(user.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }
}

/// In-memory [`StallRepository`].
#[derive(Default)]
pub struct InMemoryStallRepository {
    rows: RwLock<Vec<Stall>>,
}

#[async_trait]
impl StallRepository for InMemoryStallRepository {
    async fn put(&self, stall: &Stall) -> Result<(), StallRepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == stall.id) {
            Some(row) => *row = stall.clone(),
            None => rows.push(stall.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &StallId) -> Result<Option<Stall>, StallRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn delete(&self, id: &StallId) -> Result<(), StallRepositoryError> {
        let mut rows = self.rows.write().await;
        rows.retain(|row| row.id != *id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Stall>, StallRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }
}

/// In-memory [`MenuItemRepository`].
#[derive(Default)]
pub struct InMemoryMenuItemRepository {
    rows: RwLock<Vec<MenuItem>>,
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn put(&self, item: &MenuItem) -> Result<(), MenuItemRepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == item.id) {
            Some(row) => *row = item.clone(),
            None => rows.push(item.clone()),
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &MenuItemId,
    ) -> Result<Option<MenuItem>, MenuItemRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn delete(&self, id: &MenuItemId) -> Result<(), MenuItemRepositoryError> {
        let mut rows = self.rows.write().await;
        rows.retain(|row| row.id != *id);
        Ok(())
    }

    async fn list_by_stall<'a>(
        &self,
        stall_id: &StallId,
        category: Option<&'a str>,
    ) -> Result<Vec<MenuItem>, MenuItemRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.stall_id == *stall_id)
            .filter(|row| category.is_none_or(|wanted| row.category == wanted))
            .cloned()
            .collect())
    }
}

/// In-memory [`ReviewRepository`].
#[derive(Default)]
pub struct InMemoryReviewRepository {
    rows: RwLock<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn put(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == review.id) {
            Some(row) => *row = review.clone(),
            None => rows.push(review.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewRepositoryError> {
        let mut rows = self.rows.write().await;
        rows.retain(|row| row.id != *id);
        Ok(())
    }

    async fn list_by_stall(
        &self,
        stall_id: &StallId,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.stall_id == *stall_id)
            .cloned()
            .collect())
    }

    async fn find_by_stall_and_author(
        &self,
        stall_id: &StallId,
        author_id: &UserId,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.stall_id == *stall_id && row.author_id == *author_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::Utc;

    use super::*;
    use crate::domain::stall::Location;
    use crate::domain::user::Role;

    fn stall(name: &str) -> Stall {
        let now = Utc::now();
        Stall {
            id: StallId::random(),
            owner_id: UserId::random(),
            name: name.to_owned(),
            description: "fixture".to_owned(),
            location: Location::new(1.30, 103.80, "somewhere").expect("valid"),
            image_url: "http://media.test/s.jpg".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    fn item(stall_id: StallId, category: &str) -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: MenuItemId::random(),
            stall_id,
            name: "dish".to_owned(),
            price: 3.0,
            description: "fixture".to_owned(),
            category: category.to_owned(),
            image_url: "http://media.test/m.jpg".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let repo = InMemoryStallRepository::default();
        let first = stall("first");
        let second = stall("second");
        let third = stall("third");
        for row in [&first, &second, &third] {
            repo.put(row).await.expect("put");
        }

        let listed = repo.list_all().await.expect("list");
        let names: Vec<&str> = listed.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn put_replaces_an_existing_record_in_place() {
        let repo = InMemoryStallRepository::default();
        let first = stall("first");
        let second = stall("second");
        repo.put(&first).await.expect("put");
        repo.put(&second).await.expect("put");

        let mut renamed = first.clone();
        renamed.name = "renamed".to_owned();
        repo.put(&renamed).await.expect("put");

        let listed = repo.list_all().await.expect("list");
        let names: Vec<&str> = listed.iter().map(|row| row.name.as_str()).collect();
        // Replacement keeps the original slot rather than re-appending.
        assert_eq!(names, ["renamed", "second"]);
    }

    #[tokio::test]
    async fn menu_scan_filters_by_stall_and_category() {
        let repo = InMemoryMenuItemRepository::default();
        let stall_a = StallId::random();
        let stall_b = StallId::random();
        let noodles = item(stall_a, "noodles");
        let drinks = item(stall_a, "drinks");
        let other = item(stall_b, "noodles");
        for row in [&noodles, &drinks, &other] {
            repo.put(row).await.expect("put");
        }

        let all_a = repo.list_by_stall(&stall_a, None).await.expect("list");
        assert_eq!(all_a.len(), 2);

        let noodles_a = repo
            .list_by_stall(&stall_a, Some("noodles"))
            .await
            .expect("list");
        assert_eq!(noodles_a, vec![noodles]);

        let empty = repo
            .list_by_stall(&stall_a, Some("desserts"))
            .await
            .expect("list");
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn email_lookup_is_exact_and_case_sensitive() {
        let repo = InMemoryUserRepository::default();
        let now = Utc::now();
        let user = User {
            id: UserId::random(),
            email: "Jo@Example.test".to_owned(),
            full_name: "Jo".to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            role: Role::Customer,
            created_at: now,
            updated_at: now,
        };
        repo.put(&user).await.expect("put");

        assert!(
            repo.find_by_email("Jo@Example.test")
                .await
                .expect("lookup")
                .is_some()
        );
        assert!(
            repo.find_by_email("jo@example.test")
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[tokio::test]
    async fn deleting_an_absent_record_is_a_no_op() {
        let repo = InMemoryReviewRepository::default();
        repo.delete(&ReviewId::random()).await.expect("delete");
        assert!(
            repo.list_by_stall(&StallId::random())
                .await
                .expect("list")
                .is_empty()
        );
    }
}
