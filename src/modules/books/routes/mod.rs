//! Axum handlers for the Books module.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use livraria_http::error::AppError;

use super::models::Book;
use super::registry::SharedRegistry;

/// GET /books
pub async fn list_books(State(registry): State<SharedRegistry>) -> Json<Vec<Book>> {
    Json(registry.list().await)
}

/// POST /books
///
/// The client-supplied id, if any, is ignored; malformed JSON is rejected
/// with 400 rather than default-constructing a record.
pub async fn create_book(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(draft) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let created = registry.create(draft).await;
    info!(id = created.id, "book created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /books/{id}
pub async fn get_book(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    registry
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no book with id {id}")))
}

/// PUT /books/{id}
///
/// Full replacement: the body is stored whole, including its id. The path
/// id only selects which record is replaced.
pub async fn update_book(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i64>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let Json(replacement) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let updated = registry
        .update(id, replacement)
        .await
        .ok_or_else(|| AppError::not_found(format!("no book with id {id}")))?;
    info!(id, new_id = updated.id, "book updated");

    Ok(Json(updated))
}

/// DELETE /books/{id}
///
/// Responds 200 whether or not a record was removed; a miss is only logged.
pub async fn delete_book(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i64>,
) -> StatusCode {
    if registry.delete(id).await {
        info!(id, "book deleted");
    } else {
        tracing::debug!(id, "delete requested for unknown book id");
    }

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::registry::BookRegistry;
    use std::sync::Arc;

    fn seeded_state() -> SharedRegistry {
        Arc::new(BookRegistry::seeded())
    }

    #[tokio::test]
    async fn list_returns_the_seed_catalogue() {
        let registry = seeded_state();

        let Json(books) = list_books(State(registry)).await;
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].title, "Dom Casmurro");
    }

    #[tokio::test]
    async fn create_responds_created_and_assigns_id() {
        let registry = seeded_state();

        let payload = Book {
            id: 0,
            title: "X".to_string(),
            author: "Y".to_string(),
        };
        let response = create_book(State(registry.clone()), Ok(Json(payload)))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(registry.count().await, 4);
        assert_eq!(registry.get(4).await.unwrap().title, "X");
    }

    #[tokio::test]
    async fn get_present_is_ok_and_absent_is_not_found() {
        let registry = seeded_state();

        let Json(book) = get_book(State(registry.clone()), Path(1)).await.unwrap();
        assert_eq!(book.author, "Machado de Assis");

        let error = get_book(State(registry.clone()), Path(42)).await.unwrap_err();
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);

        let error = get_book(State(registry), Path(-1)).await.unwrap_err();
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_record_with_body() {
        let registry = seeded_state();

        let replacement = Book {
            id: 99,
            title: "Z".to_string(),
            author: "W".to_string(),
        };
        let Json(updated) = update_book(State(registry.clone()), Path(2), Ok(Json(replacement)))
            .await
            .unwrap();

        assert_eq!(updated.id, 99);
        assert_eq!(registry.count().await, 3);
        assert_eq!(registry.list().await[1].id, 99);
    }

    #[tokio::test]
    async fn update_absent_is_not_found_without_mutation() {
        let registry = seeded_state();

        let replacement = Book {
            id: 42,
            title: "Z".to_string(),
            author: "W".to_string(),
        };
        let error = update_book(State(registry.clone()), Path(42), Ok(Json(replacement)))
            .await
            .unwrap_err();

        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(registry.count().await, 3);
    }

    #[tokio::test]
    async fn delete_is_ok_for_present_and_absent_ids() {
        let registry = seeded_state();

        let status = delete_book(State(registry.clone()), Path(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(registry.count().await, 2);

        let status = delete_book(State(registry.clone()), Path(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(registry.count().await, 2);
    }
}
