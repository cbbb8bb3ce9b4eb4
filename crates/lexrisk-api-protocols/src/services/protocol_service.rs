//! Protocol library service.

use crate::error::ApiProtocolsError;
use crate::models::{
    ListProtocolsQuery, ProtocolItem, ProtocolListResponse, UpvoteResponse, DEFAULT_CATEGORY_NAME,
};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A protocol row joined with its category name.
#[derive(Debug, FromRow)]
struct ProtocolWithCategory {
    id: Uuid,
    title: String,
    body: String,
    business_types: Vec<String>,
    jurisdictions: Vec<String>,
    usage_count: i64,
    upvote_count: i64,
    created_at: DateTime<Utc>,
    category_name: Option<String>,
}

/// Service for the shared protocol library.
#[derive(Clone)]
pub struct ProtocolService {
    pool: PgPool,
}

impl ProtocolService {
    /// Create a new protocol service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List public, system-authored protocols matching every provided filter.
    ///
    /// Ordering: usage count descending, then creation time descending, so
    /// the most-used and most-recent protocols come first.
    ///
    /// # Errors
    ///
    /// Returns `ApiProtocolsError::Database` if the query fails.
    pub async fn list_protocols(
        &self,
        query: &ListProtocolsQuery,
    ) -> Result<ProtocolListResponse, ApiProtocolsError> {
        // Build the WHERE clause incrementally; filters are conjunctive and
        // binds are numbered as they are added.
        let mut sql = String::from(
            r"
            SELECT p.id, p.title, p.body, p.business_types, p.jurisdictions,
                   p.usage_count, p.upvote_count, p.created_at,
                   c.name AS category_name
            FROM protocols p
            LEFT JOIN risk_categories c ON c.id = p.category_id
            WHERE p.is_public AND p.source = 'SYSTEM'
            ",
        );
        let mut param_idx: usize = 1;

        if query.business_type.is_some() {
            sql.push_str(&format!(" AND ${param_idx} = ANY(p.business_types)"));
            param_idx += 1;
        }
        if query.jurisdiction.is_some() {
            sql.push_str(&format!(" AND ${param_idx} = ANY(p.jurisdictions)"));
            param_idx += 1;
        }
        if query.category.is_some() {
            sql.push_str(&format!(" AND p.category_id = ${param_idx}"));
        }

        sql.push_str(" ORDER BY p.usage_count DESC, p.created_at DESC");

        let mut q = sqlx::query_as::<_, ProtocolWithCategory>(&sql);

        if let Some(business_type) = &query.business_type {
            q = q.bind(business_type);
        }
        if let Some(jurisdiction) = &query.jurisdiction {
            q = q.bind(jurisdiction);
        }
        if let Some(category) = query.category {
            q = q.bind(category);
        }

        let rows = q.fetch_all(&self.pool).await?;

        let protocols: Vec<ProtocolItem> = rows
            .into_iter()
            .map(|row| ProtocolItem {
                id: row.id,
                title: row.title,
                body: row.body,
                category: row
                    .category_name
                    .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
                business_types: row.business_types,
                jurisdictions: row.jurisdictions,
                usage_count: row.usage_count,
                upvote_count: row.upvote_count,
                created_at: row.created_at,
            })
            .collect();

        let total = protocols.len() as i64;

        tracing::debug!(
            total,
            business_type = ?query.business_type,
            jurisdiction = ?query.jurisdiction,
            category = ?query.category,
            "Listed protocols"
        );

        Ok(ProtocolListResponse { protocols, total })
    }

    /// Upvote a public protocol, returning the new count.
    ///
    /// # Errors
    ///
    /// Returns `ApiProtocolsError::NotFound` if the protocol does not exist
    /// or is not public.
    pub async fn upvote(&self, protocol_id: Uuid) -> Result<UpvoteResponse, ApiProtocolsError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r"
            UPDATE protocols
            SET upvote_count = upvote_count + 1, updated_at = NOW()
            WHERE id = $1 AND is_public
            RETURNING upvote_count
            ",
        )
        .bind(protocol_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((upvote_count,)) => Ok(UpvoteResponse {
                id: protocol_id,
                upvote_count,
            }),
            None => Err(ApiProtocolsError::NotFound),
        }
    }
}
