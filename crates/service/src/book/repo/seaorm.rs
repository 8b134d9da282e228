use sea_orm::DatabaseConnection;

use models::errors::ModelError;

use crate::book::domain::Book;
use crate::book::repository::BookRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, ServiceError> {
        let rows = models::book::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, ServiceError> {
        Ok(models::book::find_by_id(&self.db, id).await?.map(Book::from))
    }

    async fn save(&self, book: Book) -> Result<Book, ServiceError> {
        let saved = match book.id {
            Some(id) => match models::book::update(&self.db, id, &book.title, &book.author, &book.isbn).await {
                Ok(m) => m,
                Err(ModelError::NotFound(_)) => models::book::insert(&self.db, &book.title, &book.author, &book.isbn).await?,
                Err(e) => return Err(e.into()),
            },
            None => models::book::insert(&self.db, &book.title, &book.author, &book.isbn).await?,
        };
        Ok(saved.into())
    }

    async fn delete(&self, book: &Book) -> Result<(), ServiceError> {
        if let Some(id) = book.id {
            models::book::delete_by_id(&self.db, id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn save_without_id_assigns_one() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let saved = repo.save(Book::new("Dune", "Herbert", "9780441013593")).await?;
        let id = saved.id.expect("id assigned");
        assert_eq!(repo.find_by_id(id).await?, Some(saved));
        Ok(())
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let saved = repo.save(Book::new("Dune", "Herbert", "1")).await?;
        let again = repo.save(Book { id: saved.id, ..Book::new("Dune (Deluxe)", "Herbert", "1") }).await?;
        assert_eq!(again.id, saved.id);
        assert_eq!(repo.find_all().await?, vec![again]);
        Ok(())
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_fresh_row() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let saved = repo.save(Book { id: Some(500), ..Book::new("Emma", "Austen", "2") }).await?;
        assert!(saved.id.is_some());
        assert_eq!(repo.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_row() -> anyhow::Result<()> {
        let repo = SeaOrmBookRepository::new(get_db().await?);
        let saved = repo.save(Book::new("Dune", "Herbert", "1")).await?;
        repo.delete(&saved).await?;
        assert!(repo.find_by_id(saved.id.unwrap()).await?.is_none());
        repo.delete(&Book::default()).await?;
        Ok(())
    }
}
