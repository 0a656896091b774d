use rusqlite::params;
use tokio_rusqlite::{Connection, Result};

/// A saved lookup. The rendered markdown is stored as-is so the entry stays
/// readable even after the dictionary is rebuilt.
#[derive(Debug, Clone)]
pub struct FavoriteEntry {
    pub language: String,
    pub word: String,
    pub markdown: String,
    pub source_url: String,
}

// (language, word) is the identity of a favorite, compared trimmed and
// case-insensitive
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn ensure_table(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY,
            language TEXT NOT NULL,
            word TEXT NOT NULL,
            markdown TEXT NOT NULL,
            source_url TEXT NOT NULL,
            UNIQUE (language, word)
        )",
        (),
    )?;

    Ok(())
}

pub async fn insert_favorite(favorite: FavoriteEntry) -> Result<()> {
    let conn = Connection::open("./db/database.db").await?;

    conn.call(move |conn| {
        ensure_table(conn)?;

        conn.execute(
            "INSERT INTO favorites (language, word, markdown, source_url)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (language, word) DO UPDATE SET markdown = ?3, source_url = ?4",
            params![
                normalize(&favorite.language),
                normalize(&favorite.word),
                favorite.markdown,
                favorite.source_url
            ],
        )?;

        Ok(())
    })
    .await
}

pub async fn remove_favorite(language: String, word: String) -> Result<()> {
    let conn = Connection::open("./db/database.db").await?;

    conn.call(move |conn| {
        ensure_table(conn)?;

        conn.execute(
            "DELETE FROM favorites WHERE language = ?1 AND word = ?2",
            [normalize(&language), normalize(&word)],
        )?;

        Ok(())
    })
    .await
}

pub async fn get_favorites() -> Result<Vec<FavoriteEntry>> {
    let conn = Connection::open("./db/database.db").await?;

    let favorites = conn
        .call(|conn| {
            ensure_table(conn)?;

            let mut stmt = conn.prepare(
                "SELECT language, word, markdown, source_url FROM favorites ORDER BY id",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok(FavoriteEntry {
                    language: row.get(0)?,
                    word: row.get(1)?,
                    markdown: row.get(2)?,
                    source_url: row.get(3)?,
                })
            })?;

            let mut favorites = Vec::new();

            for favorite in rows {
                favorites.push(favorite?);
            }

            Ok(favorites)
        })
        .await?;

    Ok(favorites)
}

pub async fn is_favorite(language: String, word: String) -> Result<bool> {
    let conn = Connection::open("./db/database.db").await?;

    conn.call(move |conn| {
        let row: rusqlite::Result<i64> = conn.query_row(
            "SELECT id FROM favorites WHERE language = ?1 AND word = ?2",
            [normalize(&language), normalize(&word)],
            |row| row.get(0),
        );

        Ok(row.is_ok())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed_and_case_insensitive() {
        assert_eq!(normalize("  Laufen "), "laufen");
        assert_eq!(normalize("DE"), "de");
        assert_eq!(normalize("laufen"), normalize(" LAUFEN  "));
    }
}
