use crate::DbTest;

/// The record used by most tests.
#[derive(Debug, Default, Clone, PartialEq, jorm::Model)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f32,
}

/// Creates the `album` table with three rows.
pub fn albums(test: &DbTest) -> Vec<String> {
    let table = test.table("album");

    vec![
        format!(
            "CREATE TABLE {table} (id BIGINT, title VARCHAR(255), artist VARCHAR(255), price FLOAT)"
        ),
        format!("INSERT INTO {table} VALUES (1, 'Blue Train', 'John Coltrane', 56.99)"),
        format!("INSERT INTO {table} VALUES (2, 'Giant Steps', 'John Coltrane', 63.99)"),
        format!("INSERT INTO {table} VALUES (3, 'Jeru', 'Gerry Mulligan', 17.99)"),
    ]
}

pub fn blue_train() -> Album {
    Album {
        id: 1,
        title: "Blue Train".to_string(),
        artist: "John Coltrane".to_string(),
        price: 56.99,
    }
}
