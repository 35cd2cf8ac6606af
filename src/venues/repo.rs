use sqlx::PgPool;
use uuid::Uuid;

use crate::venues::dto::NewVenue;
use crate::venues::repo_types::{Venue, VenueListItem};

impl Venue {
    /// Insert a new venue with the acting user as both attribution fields.
    pub async fn insert(db: &PgPool, new: &NewVenue, actor: Uuid) -> sqlx::Result<Venue> {
        sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues
                (name, category, price_range, vibe, latitude, longitude, address,
                 seating, is_licensed, has_shisha, google_place_id, rating,
                 added_by, last_modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING id, name, category, price_range, vibe, latitude, longitude,
                      address, seating, is_licensed, has_shisha, google_place_id,
                      rating, added_by, last_modified_by, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(new.category)
        .bind(&new.price_range)
        .bind(&new.vibe)
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(&new.address)
        .bind(new.seating)
        .bind(new.is_licensed)
        .bind(new.has_shisha)
        .bind(&new.google_place_id)
        .bind(new.rating)
        .bind(actor)
        .fetch_one(db)
        .await
    }

    /// All venues, newest first, with attribution user names for display.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<VenueListItem>> {
        sqlx::query_as::<_, VenueListItem>(
            r#"
            SELECT v.id, v.name, v.category, v.price_range, v.vibe, v.latitude,
                   v.longitude, v.address, v.seating, v.is_licensed, v.has_shisha,
                   v.google_place_id, v.rating, v.added_by, v.last_modified_by,
                   au.name AS added_by_user, mu.name AS modified_by_user,
                   v.created_at, v.updated_at
            FROM venues v
            LEFT JOIN users au ON au.id = v.added_by
            LEFT JOIN users mu ON mu.id = v.last_modified_by
            ORDER BY v.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn get(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, category, price_range, vibe, latitude, longitude,
                   address, seating, is_licensed, has_shisha, google_place_id,
                   rating, added_by, last_modified_by, created_at, updated_at
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Full replace of the mutable fields in a single statement. Returns
    /// None when the id does not exist.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        new: &NewVenue,
        actor: Uuid,
    ) -> sqlx::Result<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues SET
                name = $2, category = $3, price_range = $4, vibe = $5,
                latitude = $6, longitude = $7, address = $8, seating = $9,
                is_licensed = $10, has_shisha = $11, google_place_id = $12,
                rating = $13, last_modified_by = $14, updated_at = now()
            WHERE id = $1
            RETURNING id, name, category, price_range, vibe, latitude, longitude,
                      address, seating, is_licensed, has_shisha, google_place_id,
                      rating, added_by, last_modified_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(new.category)
        .bind(&new.price_range)
        .bind(&new.vibe)
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(&new.address)
        .bind(new.seating)
        .bind(new.is_licensed)
        .bind(new.has_shisha)
        .bind(&new.google_place_id)
        .bind(new.rating)
        .bind(actor)
        .fetch_optional(db)
        .await
    }

    /// Returns false when the id does not exist.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM venues WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
