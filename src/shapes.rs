//! Resource shapes for the marketplace API.
//!
//! Output keys are camelCase; source fields follow the snake_case column
//! names of the underlying records. Credentials and tokens are never
//! declared, so they cannot reach a response through these shapes.

use crate::{FieldMap, ResourceShape};

/// Account of a buyer, seller, moderator or admin.
pub fn user() -> ResourceShape {
    ResourceShape::new(
        "user",
        FieldMap::new()
            .same("id")
            .same("name")
            .same("email")
            .same("role")
            .field("isVerifiedSeller", "is_verified_seller")
            .optional("avatarUrl", "avatar_url")
            .field("emailVerifiedAt", "email_verified_at")
            .field("createdAt", "created_at")
            .field("updatedAt", "updated_at"),
    )
}

/// Authorization role.
pub fn role() -> ResourceShape {
    ResourceShape::new(
        "role",
        FieldMap::new()
            .same("id")
            .same("name")
            .field("displayName", "display_name"),
    )
}

/// Item offered for sale by a seller.
pub fn listing() -> ResourceShape {
    ResourceShape::new(
        "listing",
        FieldMap::new()
            .same("id")
            .field("sellerId", "seller_id")
            .same("title")
            .same("description")
            .same("price")
            .same("currency")
            .same("status")
            .field("isPublished", "is_published")
            .field("publishedAt", "published_at")
            .optional("thumbnailUrl", "thumbnail_url")
            .field("createdAt", "created_at")
            .field("updatedAt", "updated_at"),
    )
}

/// Image in a listing gallery. Thumbnails are generated after upload, so
/// the thumbnail may not exist yet.
pub fn listing_image() -> ResourceShape {
    ResourceShape::new(
        "listing_image",
        FieldMap::new()
            .same("id")
            .field("listingId", "listing_id")
            .same("url")
            .optional("thumbnailUrl", "thumbnail_url")
            .same("position")
            .field("createdAt", "created_at"),
    )
}

/// Verification appointment between a seller and a moderator.
pub fn seller_appointment() -> ResourceShape {
    ResourceShape::new(
        "seller_appointment",
        FieldMap::new()
            .same("id")
            .field("sellerId", "seller_id")
            .field("moderatorId", "moderator_id")
            .field("scheduledAt", "scheduled_at")
            .same("status")
            .optional("notes", "notes")
            .field("createdAt", "created_at"),
    )
}

/// Every marketplace shape.
pub fn all() -> Vec<ResourceShape> {
    vec![user(), role(), listing(), listing_image(), seller_appointment()]
}
