use std::sync::Arc;

use tokio::sync::RwLock;

use super::models::Book;

/// In-memory book collection with CRUD operations.
///
/// The collection is an ordered sequence; every mutation preserves the
/// relative order of untouched records. Identifiers come from a monotonic
/// counter kept alongside the collection, so ids are never reused after a
/// deletion. All access is serialized behind a read-write lock.
pub struct BookRegistry {
    inner: RwLock<Inner>,
}

struct Inner {
    books: Vec<Book>,
    next_id: i64,
}

impl BookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a registry pre-populated with the startup catalogue.
    pub fn seeded() -> Self {
        let books = vec![
            Book {
                id: 1,
                title: "Dom Casmurro".to_string(),
                author: "Machado de Assis".to_string(),
            },
            Book {
                id: 2,
                title: "O Filho de Mil Homens".to_string(),
                author: "Valter Hugo Mãe".to_string(),
            },
            Book {
                id: 3,
                title: "A Arte da Guerra".to_string(),
                author: "Sun Tzu".to_string(),
            },
        ];
        let next_id = books.len() as i64 + 1;

        Self {
            inner: RwLock::new(Inner { books, next_id }),
        }
    }

    /// Return all books in insertion order.
    pub async fn list(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    /// Number of books currently stored.
    pub async fn count(&self) -> usize {
        self.inner.read().await.books.len()
    }

    /// Append a new book, assigning the next identifier.
    ///
    /// Any client-supplied id on the draft is ignored.
    pub async fn create(&self, draft: Book) -> Book {
        let mut inner = self.inner.write().await;

        let book = Book {
            id: inner.next_id,
            ..draft
        };
        inner.next_id += 1;
        inner.books.push(book.clone());

        book
    }

    /// Find a book by id.
    pub async fn get(&self, id: i64) -> Option<Book> {
        self.inner
            .read()
            .await
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Replace the book found under the path id with the given record.
    ///
    /// The replacement is stored whole, including its own id, at the
    /// existing position. Returns `None` when no book matches `id`.
    pub async fn update(&self, id: i64, replacement: Book) -> Option<Book> {
        let mut inner = self.inner.write().await;

        let position = inner.books.iter().position(|book| book.id == id)?;
        inner.books[position] = replacement.clone();

        Some(replacement)
    }

    /// Remove the book with the given id, keeping the rest in order.
    ///
    /// Returns whether a record was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;

        match inner.books.iter().position(|book| book.id == id) {
            Some(position) => {
                inner.books.remove(position);
                true
            }
            None => false,
        }
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle used as axum state by the module's handlers.
pub type SharedRegistry = Arc<BookRegistry>;
