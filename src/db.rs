#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::attraction::Attraction;
    use crate::models::review::{Review, ReviewSubmission};
    use leptos::logging::log;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            db
        }

        fn attraction(name: &str, visible: bool) -> NewAttraction {
            NewAttraction {
                attraction_id: None,
                name: name.into(),
                description: format!("Description de {}", name),
                difficulty: 3,
                visible,
            }
        }

        fn critique(attraction_id: i64, rating: u8) -> ReviewSubmission {
            ReviewSubmission {
                attraction_id,
                last_name: "Dupont".into(),
                first_name: "Marie".into(),
                rating,
                comment: "Incroyable".into(),
                is_anonymous: false,
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"attraction".to_string()));
            assert!(tables.contains(&"critique".to_string()));
        }

        #[tokio::test]
        async fn test_attraction_insert_update_lookup() {
            let db = create_test_db().await;

            let id = db.upsert_attraction(&attraction("Silver Star", true)).await.unwrap();
            assert!(id > 0);

            let mut updated = attraction("Silver Star II", false);
            updated.attraction_id = Some(id);
            assert_eq!(db.upsert_attraction(&updated).await.unwrap(), id);

            let stored = db.get_attraction(id).await.unwrap().unwrap();
            assert_eq!(stored.name, "Silver Star II");
            assert!(!stored.visible);
            assert_eq!(db.get_all_attractions().await.unwrap().len(), 1);
            assert!(db.get_attraction(id + 100).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_visible_filter_and_nested_critiques() {
            let db = create_test_db().await;
            let shown = db.upsert_attraction(&attraction("Le Condor", true)).await.unwrap();
            let hidden = db.upsert_attraction(&attraction("Manoir", false)).await.unwrap();
            db.add_critique(&critique(shown, 5)).await.unwrap();
            db.add_critique(&critique(hidden, 2)).await.unwrap();

            let visible = db.get_visible_attractions().await.unwrap();
            assert_eq!(visible.len(), 1);
            assert!(visible[0].critiques.is_none());

            let with_critiques = db.get_visible_attractions_with_critiques().await.unwrap();
            assert_eq!(with_critiques.len(), 1);
            assert_eq!(with_critiques[0].attraction_id, shown);
            assert_eq!(with_critiques[0].reviews().len(), 1);
            assert_eq!(with_critiques[0].reviews()[0].rating, 5);
        }

        #[tokio::test]
        async fn test_critiques_newest_first_and_cascade() {
            let db = create_test_db().await;
            let id = db.upsert_attraction(&attraction("Space Mountain", true)).await.unwrap();
            let first = db.add_critique(&critique(id, 4)).await.unwrap();
            let second = db.add_critique(&critique(id, 5)).await.unwrap();

            let critiques = db.get_critiques_by_attraction(id).await.unwrap();
            assert_eq!(
                critiques.iter().map(|c| c.critique_id).collect::<Vec<_>>(),
                vec![second, first]
            );

            assert_eq!(db.delete_attraction(id).await.unwrap(), 1);
            assert!(db.get_critiques_by_attraction(id).await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_critique_constraints() {
            let db = create_test_db().await;
            let id = db.upsert_attraction(&attraction("Petit Train", true)).await.unwrap();

            assert!(db.add_critique(&critique(id + 1, 4)).await.is_err());
            assert!(db.add_critique(&critique(id, 9)).await.is_err());
        }

        #[tokio::test]
        async fn test_seed_only_once() {
            let db = create_test_db().await;
            assert!(db.seed_demo_data().await.unwrap());
            assert!(!db.seed_demo_data().await.unwrap());

            let all = db.get_all_attractions().await.unwrap();
            let visible = db.get_visible_attractions().await.unwrap();
            assert_eq!(all.len(), DEMO_ATTRACTIONS.len());
            assert!(visible.len() < all.len());
        }
    }

    // Seed rows: (name, description, difficulty, visible)
    const DEMO_ATTRACTIONS: &[(&str, &str, i32, bool)] = &[
        ("Silver Star", "Une montagne russe mythique avec des loopings vertigineux et une chute de 73 mètres.", 4, true),
        ("Le Condor", "Une chute libre spectaculaire de 100 mètres de hauteur. Sensations fortes garanties!", 5, true),
        ("Le Carrousel", "Manège traditionnel pour les plus petits. Douceur et musique d'antan.", 1, true),
        ("Maintenance Express", "Attraction actuellement en maintenance - NE PAS AFFICHER", 3, false),
        ("Space Mountain", "Voyage dans les étoiles à toute vitesse dans le noir complet.", 4, true),
        ("Le Petit Train", "Balade tranquille à travers le parc pour découvrir les coulisses.", 1, true),
        ("Le Manoir Hanté", "Parcours terrifiant dans une maison hantée. Âmes sensibles s'abstenir!", 4, false),
    ];

    // (attraction index in DEMO_ATTRACTIONS, last name, first name, rating, comment, anonymous)
    const DEMO_CRITIQUES: &[(usize, &str, &str, u8, &str, bool)] = &[
        (0, "Dupont", "Marie", 5, "Incroyable! Les sensations sont au rendez-vous. Une attraction à ne pas manquer!", false),
        (0, "Martin", "Jean", 4, "Très bien mais un peu d'attente. L'attraction en elle-même est top!", false),
        (0, "Anonyme", "", 5, "Meilleure attraction du parc sans hésitation!", true),
        (1, "Bernard", "Sophie", 5, "J'ai adoré la chute libre! Mon cœur bat encore!", false),
        (1, "Anonyme", "", 3, "Trop intense pour moi, mais bien pour les amateurs de sensations fortes.", true),
        (2, "Petit", "Lucas", 5, "Mon fils de 4 ans a adoré! Parfait pour les enfants.", false),
        (4, "Rousseau", "Emma", 5, "Space Mountain est toujours aussi magique après toutes ces années!", false),
        (4, "Anonyme", "", 4, "Super attraction mais la file d'attente était très longue.", true),
        (5, "Lefebvre", "Pierre", 4, "Balade agréable et reposante entre deux attractions à sensations.", false),
    ];

    const ATTRACTION_COLUMNS: &str = "attraction_id, nom, description, difficulte, visible";
    const CRITIQUE_COLUMNS: &str =
        "critique_id, attraction_id, nom, prenom, note, commentaire, est_anonyme";

    /// Validated attraction ready to be written. `attraction_id` selects
    /// update over insert.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NewAttraction {
        pub attraction_id: Option<i64>,
        pub name: String,
        pub description: String,
        pub difficulty: i32,
        pub visible: bool,
    }

    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    fn attraction_from_row(row: &Row<'_>) -> Result<Attraction, Error> {
        Ok(Attraction {
            attraction_id: row.get(0)?,
            name: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            difficulty: row.get(3)?,
            visible: row.get(4)?,
            critiques: None,
        })
    }

    fn critique_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            critique_id: row.get(0)?,
            attraction_id: row.get(1)?,
            last_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            first_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            rating: row.get(4)?,
            comment: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            is_anonymous: row.get(6)?,
        })
    }

    fn select_attractions(conn: &Connection, filter: &str) -> Result<Vec<Attraction>, Error> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM attraction {} ORDER BY attraction_id",
            ATTRACTION_COLUMNS, filter
        ))?;
        let rows = stmt.query_map([], attraction_from_row)?;
        rows.collect()
    }

    fn select_critiques(conn: &Connection, attraction_id: i64, order: &str) -> Result<Vec<Review>, Error> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM critique WHERE attraction_id = ? ORDER BY critique_id {}",
            CRITIQUE_COLUMNS, order
        ))?;
        let rows = stmt.query_map([attraction_id], critique_from_row)?;
        rows.collect()
    }

    fn insert_critique(conn: &Connection, critique: &ReviewSubmission) -> Result<i64, Error> {
        conn.execute(
            "INSERT INTO critique (attraction_id, nom, prenom, note, commentaire, est_anonyme)
            VALUES (?, ?, ?, ?, ?, ?)",
            params![
                critique.attraction_id,
                &critique.last_name,
                &critique.first_name,
                critique.rating,
                &critique.comment,
                critique.is_anonymous
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    impl Database {
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            log!("[DB] Connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS attraction (
                    attraction_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nom TEXT NOT NULL,
                    description TEXT,
                    difficulte INTEGER NOT NULL CHECK (difficulte BETWEEN 1 AND 5),
                    visible INTEGER NOT NULL DEFAULT 1,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                CREATE INDEX IF NOT EXISTS idx_attraction_visible ON attraction (visible);",
            )
            .map_err(|e| {
                log!("[DB] Failed creating attraction table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS critique (
                    critique_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    attraction_id INTEGER NOT NULL,
                    nom TEXT,
                    prenom TEXT,
                    note INTEGER NOT NULL CHECK (note BETWEEN 1 AND 5),
                    commentaire TEXT,
                    est_anonyme INTEGER NOT NULL DEFAULT 0,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (attraction_id) REFERENCES attraction(attraction_id)
                        ON DELETE CASCADE ON UPDATE CASCADE
                );
                CREATE INDEX IF NOT EXISTS idx_critique_attraction ON critique (attraction_id);",
            )
            .map_err(|e| {
                log!("[DB] Failed creating critique table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Fills an empty database with the demo park. Returns whether
        /// anything was inserted.
        pub async fn seed_demo_data(&self) -> Result<bool, Error> {
            let mut conn = self.conn.lock().await;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM attraction", [], |row| row.get(0))?;
            if count > 0 {
                log!("[DB] {} attractions present, skipping demo seed", count);
                return Ok(false);
            }

            let tx = conn.transaction()?;
            let mut ids = Vec::with_capacity(DEMO_ATTRACTIONS.len());
            for (name, description, difficulty, visible) in DEMO_ATTRACTIONS {
                tx.execute(
                    "INSERT INTO attraction (nom, description, difficulte, visible) VALUES (?, ?, ?, ?)",
                    params![name, description, difficulty, visible],
                )?;
                ids.push(tx.last_insert_rowid());
            }
            for (index, last_name, first_name, rating, comment, anonymous) in DEMO_CRITIQUES {
                let critique = ReviewSubmission {
                    attraction_id: ids[*index],
                    last_name: last_name.to_string(),
                    first_name: first_name.to_string(),
                    rating: *rating,
                    comment: comment.to_string(),
                    is_anonymous: *anonymous,
                };
                insert_critique(&tx, &critique)?;
            }
            tx.commit()?;
            log!(
                "[DB] Seeded {} attractions and {} critiques",
                DEMO_ATTRACTIONS.len(),
                DEMO_CRITIQUES.len()
            );
            Ok(true)
        }

        pub async fn get_all_attractions(&self) -> Result<Vec<Attraction>, Error> {
            let conn = self.conn.lock().await;
            let attractions = select_attractions(&conn, "")?;
            log!("[DB] Fetched {} attractions", attractions.len());
            Ok(attractions)
        }

        pub async fn get_attraction(&self, attraction_id: i64) -> Result<Option<Attraction>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {} FROM attraction WHERE attraction_id = ?", ATTRACTION_COLUMNS),
                [attraction_id],
                attraction_from_row,
            )
            .optional()
        }

        pub async fn get_visible_attractions(&self) -> Result<Vec<Attraction>, Error> {
            let conn = self.conn.lock().await;
            select_attractions(&conn, "WHERE visible = 1")
        }

        pub async fn get_visible_attractions_with_critiques(&self) -> Result<Vec<Attraction>, Error> {
            let conn = self.conn.lock().await;
            let mut attractions = select_attractions(&conn, "WHERE visible = 1")?;
            for attraction in attractions.iter_mut() {
                attraction.critiques = Some(select_critiques(&conn, attraction.attraction_id, "ASC")?);
            }
            log!("[DB] Fetched {} visible attractions with critiques", attractions.len());
            Ok(attractions)
        }

        /// Inserts the attraction, or updates it in place when it carries an
        /// id. Returns the id either way.
        pub async fn upsert_attraction(&self, attraction: &NewAttraction) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            match attraction.attraction_id {
                Some(id) => {
                    conn.execute(
                        "UPDATE attraction SET nom = ?, description = ?, difficulte = ?, visible = ?
                        WHERE attraction_id = ?",
                        params![
                            &attraction.name,
                            &attraction.description,
                            attraction.difficulty,
                            attraction.visible,
                            id
                        ],
                    )?;
                    log!("[DB] Attraction updated: {}", id);
                    Ok(id)
                }
                None => {
                    conn.execute(
                        "INSERT INTO attraction (nom, description, difficulte, visible) VALUES (?, ?, ?, ?)",
                        params![
                            &attraction.name,
                            &attraction.description,
                            attraction.difficulty,
                            attraction.visible
                        ],
                    )?;
                    let id = conn.last_insert_rowid();
                    log!("[DB] Attraction inserted: {}", id);
                    Ok(id)
                }
            }
        }

        /// Returns the number of attractions removed. Their critiques go with them.
        pub async fn delete_attraction(&self, attraction_id: i64) -> Result<usize, Error> {
            let conn = self.conn.lock().await;
            let removed = conn.execute("DELETE FROM attraction WHERE attraction_id = ?", [attraction_id])?;
            log!("[DB] Attraction deleted: {} ({} rows)", attraction_id, removed);
            Ok(removed)
        }

        pub async fn add_critique(&self, critique: &ReviewSubmission) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            let id = insert_critique(&conn, critique)?;
            log!("[DB] Critique {} added to attraction {}", id, critique.attraction_id);
            Ok(id)
        }

        pub async fn get_critiques_by_attraction(&self, attraction_id: i64) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            select_critiques(&conn, attraction_id, "DESC")
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{Database, NewAttraction};
