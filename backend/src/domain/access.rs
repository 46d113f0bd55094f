//! Pure authorization decisions shared by every resource service.
//!
//! The rules run in a fixed precedence order, first applicable wins:
//!
//! 1. existence of the target and every ancestor in its ownership chain
//!    (`not_found`),
//! 2. ownership-chain consistency between the child's parent reference and
//!    the addressed parent (`mismatch`),
//! 3. role or identity match between the actor and the resource's owner or
//!    author (`forbidden`),
//! 4. operation-specific business rules, checked by the calling service once
//!    these rules allow the write (`invalid_input` and friends).
//!
//! Everything here is synchronous and side-effect free; services fetch the
//! candidate records and hand them in as `Option`s so that missing records
//! flow through rule 1 rather than being special-cased at each call site.

use crate::domain::error::DomainError;
use crate::domain::menu::MenuItem;
use crate::domain::review::Review;
use crate::domain::stall::{Stall, StallId};
use crate::domain::user::User;

/// Narrow the actor to the owner role.
///
/// Stall creation is the one write with no target resource to compare
/// against, so the role itself is the gate.
pub fn require_owner(actor: &User) -> Result<(), DomainError> {
    if !actor.is_owner() {
        return Err(DomainError::forbidden("user is not an owner"));
    }
    Ok(())
}

fn existing<T>(resource: Option<T>, what: &str) -> Result<T, DomainError> {
    resource.ok_or_else(|| DomainError::not_found(format!("{what} not found")))
}

/// Authorize a write against a stall: the stall must exist and the actor
/// must be its owner.
///
/// Also gates writes that create or bulk-delete children under the stall
/// (menu item creation, category deletion), where the stall is the whole
/// ownership chain.
pub fn stall_write<'a>(actor: &User, stall: Option<&'a Stall>) -> Result<&'a Stall, DomainError> {
    let stall = existing(stall, "stall")?;
    if stall.owner_id != actor.id {
        return Err(DomainError::forbidden("you are not the owner of this stall"));
    }
    Ok(stall)
}

/// Authorize a write against an existing menu item addressed through a stall.
///
/// Checks, in precedence order: stall existence, item existence, the item's
/// parent reference against the addressed stall, then the actor against the
/// stall's owner.
pub fn menu_item_write<'a>(
    actor: &User,
    stall: Option<&Stall>,
    addressed: &StallId,
    item: Option<&'a MenuItem>,
) -> Result<&'a MenuItem, DomainError> {
    let stall = existing(stall, "stall")?;
    let item = existing(item, "menu item")?;
    if item.stall_id != *addressed {
        return Err(DomainError::mismatch(
            "menu item does not belong to this stall",
        ));
    }
    if stall.owner_id != actor.id {
        return Err(DomainError::forbidden("you are not the owner of this stall"));
    }
    Ok(item)
}

/// Authorize review creation: the stall must exist and the actor must not be
/// its owner.
///
/// Duplicate detection and rating bounds are business rules the review
/// service checks after this gate allows the write.
pub fn review_create<'a>(actor: &User, stall: Option<&'a Stall>) -> Result<&'a Stall, DomainError> {
    let stall = existing(stall, "stall")?;
    if stall.owner_id == actor.id {
        return Err(DomainError::forbidden("you cannot review your own stall"));
    }
    Ok(stall)
}

/// Authorize a write against an existing review addressed through a stall.
///
/// Checks, in precedence order: stall existence, review existence, the
/// review's parent reference against the addressed stall, then the actor
/// against the review's author.
pub fn review_write<'a>(
    actor: &User,
    stall: Option<&Stall>,
    addressed: &StallId,
    review: Option<&'a Review>,
) -> Result<&'a Review, DomainError> {
    existing(stall, "stall")?;
    let review = existing(review, "review")?;
    if review.stall_id != *addressed {
        return Err(DomainError::mismatch(
            "review does not belong to this stall",
        ));
    }
    if review.author_id != actor.id {
        return Err(DomainError::forbidden(
            "you are not the author of this review",
        ));
    }
    Ok(review)
}

/// Require an existing stall for a read under it.
///
/// Reads need no ownership check, only a valid actor (enforced upstream by
/// the inbound adapter) and existence.
pub fn stall_read<'a>(stall: Option<&'a Stall>) -> Result<&'a Stall, DomainError> {
    existing(stall, "stall")
}
