//! The contacts resource: field validation plus parameterized CRUD.

use super::Resource;
use crate::context::RequestContext;
use crate::error::{store_error, AppError};
use crate::response::Reply;
use crate::validate;
use async_trait::async_trait;
use serde::Serialize;

const COLUMNS: &str = "id, fname, lname, email, age, url";

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub age: Option<i64>,
    pub url: Option<String>,
}

/// Validated create/update input. `id` is only present for update.
struct ContactFields {
    id: Option<i64>,
    fname: String,
    lname: String,
    email: String,
    age: Option<i64>,
    url: Option<String>,
}

impl ContactFields {
    /// Collects every violation before failing: required fields first, then
    /// format checks on whatever was supplied.
    fn from_context(
        ctx: &RequestContext,
        require_id: bool,
        failure: &'static str,
    ) -> Result<ContactFields, AppError> {
        let mut errors = Vec::new();

        if require_id && ctx.field("id").is_none() {
            errors.push("id is required".to_string());
        }
        for name in ["fname", "lname", "email"] {
            if ctx.field(name).is_none() {
                errors.push(format!("{name} is required"));
            }
        }

        let id = ctx.field("id").map(|raw| {
            validate::integer(raw).ok_or_else(|| "id is not in the correct format".to_string())
        });
        let email = ctx.field("email").map(|raw| {
            validate::email(raw).ok_or_else(|| "email is not in the correct format".to_string())
        });
        let age = ctx.field("age").map(|raw| {
            validate::integer(raw).ok_or_else(|| "age is not in the correct format".to_string())
        });
        let url = ctx.field("url").map(|raw| {
            validate::url(raw).ok_or_else(|| "url is not in the correct format".to_string())
        });

        let mut unwrap_checked = |checked: Option<Result<_, String>>| match checked {
            Some(Ok(value)) => Some(value),
            Some(Err(message)) => {
                errors.push(message);
                None
            }
            None => None,
        };
        let id = unwrap_checked(id);
        let age = unwrap_checked(age);
        let email = match email {
            Some(Ok(value)) => value,
            Some(Err(message)) => {
                errors.push(message);
                String::new()
            }
            None => String::new(),
        };
        let url = match url {
            Some(Ok(value)) => Some(value),
            Some(Err(message)) => {
                errors.push(message);
                None
            }
            None => None,
        };

        if !errors.is_empty() {
            return Err(AppError::validation(failure, errors));
        }

        Ok(ContactFields {
            id,
            fname: ctx.field("fname").unwrap_or_default().to_string(),
            lname: ctx.field("lname").unwrap_or_default().to_string(),
            email,
            age,
            url,
        })
    }
}

pub struct Contacts;

#[async_trait]
impl Resource for Contacts {
    fn name(&self) -> &'static str {
        "contacts"
    }

    /// All rows, all columns.
    async fn index(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let rows = sqlx::query_as::<_, Contact>(&format!("SELECT {COLUMNS} FROM contacts"))
            .fetch_all(&ctx.pool)
            .await
            .map_err(store_error("Issue retrieving results"))?;
        Ok(Reply::fetched(rows))
    }

    /// One row by id. An absent row replies with an empty object, not an
    /// error.
    async fn show(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let id = match ctx.param(0) {
            None => {
                return Err(AppError::validation(
                    "Issue retrieving result",
                    vec!["id is required".to_string()],
                ))
            }
            Some(raw) => validate::integer(raw).ok_or_else(|| {
                AppError::validation(
                    "Issue retrieving result",
                    vec!["id is not in the correct format".to_string()],
                )
            })?,
        };
        let row =
            sqlx::query_as::<_, Contact>(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&ctx.pool)
                .await
                .map_err(store_error("Issue retrieving result"))?;
        Ok(match row {
            Some(contact) => Reply::fetched(contact),
            None => Reply::fetched(serde_json::Map::new()),
        })
    }

    /// Substring match on first or last name. A missing term behaves like
    /// the empty term and matches every row.
    async fn search(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let term = validate::sanitize(ctx.param(0).unwrap_or(""));
        tracing::debug!(term = %term, "search contacts");
        let rows = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {COLUMNS} FROM contacts \
             WHERE fname LIKE '%' || ?1 || '%' OR lname LIKE '%' || ?1 || '%'"
        ))
        .bind(&term)
        .fetch_all(&ctx.pool)
        .await
        .map_err(store_error("Issue retrieving results"))?;
        Ok(Reply::fetched(rows))
    }

    async fn create(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let fields = ContactFields::from_context(ctx, false, "Issue creating contact")?;
        sqlx::query(
            "INSERT INTO contacts (fname, lname, email, age, url) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&fields.fname)
        .bind(&fields.lname)
        .bind(&fields.email)
        .bind(fields.age)
        .bind(&fields.url)
        .execute(&ctx.pool)
        .await
        .map_err(store_error("Issue creating new contact"))?;
        Ok(Reply::done("Contact created successfully"))
    }

    /// Full replace of every field on the row matched by id. Zero affected
    /// rows still succeeds: there is no existence check before an update.
    async fn update(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let fields = ContactFields::from_context(ctx, true, "Issue updating contact")?;
        let result = sqlx::query(
            "UPDATE contacts SET fname = ?1, lname = ?2, email = ?3, age = ?4, url = ?5 \
             WHERE id = ?6",
        )
        .bind(&fields.fname)
        .bind(&fields.lname)
        .bind(&fields.email)
        .bind(fields.age)
        .bind(&fields.url)
        .bind(fields.id)
        .execute(&ctx.pool)
        .await
        .map_err(store_error("Issue updating contact"))?;
        tracing::debug!(rows = result.rows_affected(), "update contact");
        Ok(Reply::done("Contact updated successfully"))
    }

    /// Removes the row matched by the id form field. A missing id fails
    /// before any store call.
    async fn delete(&self, ctx: &RequestContext) -> Result<Reply, AppError> {
        let id = match ctx.field("id") {
            None => {
                return Err(AppError::validation(
                    "Issue deleting contact",
                    vec!["id is required".to_string()],
                ))
            }
            Some(raw) => validate::integer(raw).ok_or_else(|| {
                AppError::validation(
                    "Issue deleting contact",
                    vec!["id is not in the correct format".to_string()],
                )
            })?,
        };
        sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(id)
            .execute(&ctx.pool)
            .await
            .map_err(store_error("Issue deleting contact"))?;
        Ok(Reply::done("Contact deleted successfully"))
    }
}
