use anyhow::Result;
use libsql::Connection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i32,
}

/// A validated create payload. The id is always assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookmark {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i32,
}

pub struct Bookmarks<'a> {
    conn: &'a Connection,
}

impl<'a> Bookmarks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: NewBookmark) -> Result<Bookmark> {
        let query = r#"
            INSERT INTO bookmarks (name, url, description, rating)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, url, description, rating
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![input.name, input.url, input.description, input.rating],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(self.row_to_bookmark(&row)?)
        } else {
            anyhow::bail!("Failed to create bookmark")
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Bookmark>> {
        let query = r#"
            SELECT id, name, url, description, rating
            FROM bookmarks WHERE id = ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(self.row_to_bookmark(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(&self) -> Result<Vec<Bookmark>> {
        let query = r#"
            SELECT id, name, url, description, rating
            FROM bookmarks
            ORDER BY id ASC
        "#;

        let mut rows = self.conn.query(query, ()).await?;
        let mut bookmarks = Vec::new();

        while let Some(row) = rows.next().await? {
            bookmarks.push(self.row_to_bookmark(&row)?);
        }

        Ok(bookmarks)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?", libsql::params![id])
            .await?;
        Ok(result > 0)
    }

    fn row_to_bookmark(&self, row: &libsql::Row) -> Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            name: row.get(1)?,
            url: row.get(2)?,
            description: row.get(3)?,
            rating: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn new_bookmark(name: &str, rating: i32) -> NewBookmark {
        NewBookmark {
            name: name.to_string(),
            url: format!("https://{}.example.com", name),
            description: None,
            rating,
        }
    }

    #[tokio::test]
    async fn create_assigns_incrementing_ids() {
        let db = Database::in_memory().await.unwrap();
        let store = Bookmarks::new(db.connection());

        let first = store.create(new_bookmark("first", 3)).await.unwrap();
        let second = store.create(new_bookmark("second", 4)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "second");
        assert_eq!(second.rating, 4);
    }

    #[tokio::test]
    async fn get_returns_created_bookmark() {
        let db = Database::in_memory().await.unwrap();
        let store = Bookmarks::new(db.connection());

        let created = store
            .create(NewBookmark {
                name: "docs".to_string(),
                url: "https://docs.rs".to_string(),
                description: Some("crate docs".to_string()),
                rating: 5,
            })
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let db = Database::in_memory().await.unwrap();
        let store = Bookmarks::new(db.connection());

        assert_eq!(store.get(123456).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_returns_bookmarks_in_insertion_order() {
        let db = Database::in_memory().await.unwrap();
        let store = Bookmarks::new(db.connection());

        for name in ["a", "b", "c"] {
            store.create(new_bookmark(name, 2)).await.unwrap();
        }

        let listed = store.list().await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete_removes_row_and_reports_missing() {
        let db = Database::in_memory().await.unwrap();
        let store = Bookmarks::new(db.connection());

        let created = store.create(new_bookmark("gone", 1)).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert_eq!(store.get(created.id).await.unwrap(), None);
        assert!(!store.delete(created.id).await.unwrap());
    }
}
