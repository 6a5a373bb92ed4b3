// src/db/opportunities.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::connection::Database;
use crate::db::OpportunityRepository;
use crate::domain::{Opportunity, OpportunityId, Signup};
use crate::errors::ServerError;

/// All stored opportunities, oldest first.
pub fn list_opportunities(conn: &Connection) -> Result<Vec<Opportunity>, ServerError> {
    let mut stmt = conn
        .prepare("select doc from opportunities order by created_at, id")
        .map_err(|e| ServerError::DbError(format!("prepare list failed: {e}")))?;

    let docs = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| ServerError::DbError(format!("list opportunities failed: {e}")))?;

    let mut out = Vec::new();
    for doc in docs {
        let doc = doc.map_err(|e| ServerError::DbError(e.to_string()))?;
        out.push(serde_json::from_str(&doc)?);
    }
    Ok(out)
}

pub fn count_opportunities(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from opportunities", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count opportunities failed: {e}")))
}

/// Insert or replace the whole document.
pub fn upsert_opportunity(conn: &Connection, op: &Opportunity) -> Result<(), ServerError> {
    let doc = serde_json::to_string(op)?;
    conn.execute(
        r#"
        insert into opportunities (id, doc, created_at)
        values (?1, ?2, ?3)
        on conflict(id) do update set doc = excluded.doc
        "#,
        params![op.id.as_str(), doc, op.created_at.to_rfc3339()],
    )
    .map_err(|e| ServerError::DbError(format!("upsert opportunity failed: {e}")))?;
    Ok(())
}

pub fn delete_opportunity(conn: &Connection, id: &OpportunityId) -> Result<(), ServerError> {
    conn.execute("delete from opportunities where id = ?", params![id.as_str()])
        .map_err(|e| ServerError::DbError(format!("delete opportunity failed: {e}")))?;
    Ok(())
}

/// Appends a signup inside the stored document. Read and write happen in one
/// transaction so concurrent appends cannot drop each other.
pub fn append_signup(
    conn: &mut Connection,
    id: &OpportunityId,
    signup: &Signup,
) -> Result<(), ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let doc: Option<String> = tx
        .query_row(
            "select doc from opportunities where id = ?",
            params![id.as_str()],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select opportunity failed: {e}")))?;

    let Some(doc) = doc else {
        tx.rollback().ok();
        return Err(ServerError::NotFound);
    };

    let mut op: Opportunity = serde_json::from_str(&doc)?;
    op.volunteers_signed_up.push(signup.clone());
    upsert_opportunity(&tx, &op)?;

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit failed: {e}")))?;
    Ok(())
}

/// SQLite document-table persistence.
pub struct SqliteRepository {
    db: Database,
    seed: Vec<Opportunity>,
}

impl SqliteRepository {
    /// `seed` is written once when the table is still empty.
    pub fn new(db: Database, seed: Vec<Opportunity>) -> Self {
        Self { db, seed }
    }
}

impl OpportunityRepository for SqliteRepository {
    fn load_all(&self) -> Result<Vec<Opportunity>, ServerError> {
        self.db.with_conn(|conn| {
            if count_opportunities(conn)? == 0 && !self.seed.is_empty() {
                let tx = conn
                    .transaction()
                    .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;
                for op in &self.seed {
                    upsert_opportunity(&tx, op)?;
                }
                tx.commit()
                    .map_err(|e| ServerError::DbError(format!("commit failed: {e}")))?;
                tracing::info!(count = self.seed.len(), "seeded empty opportunity table");
            }
            list_opportunities(conn)
        })
    }

    fn add(&self, op: &Opportunity) -> Result<(), ServerError> {
        self.db.with_conn(|conn| upsert_opportunity(conn, op))
    }

    fn update(&self, op: &Opportunity) -> Result<(), ServerError> {
        self.db.with_conn(|conn| upsert_opportunity(conn, op))
    }

    fn delete(&self, id: &OpportunityId) -> Result<(), ServerError> {
        self.db.with_conn(|conn| delete_opportunity(conn, id))
    }

    fn append_signup(&self, id: &OpportunityId, signup: &Signup) -> Result<(), ServerError> {
        self.db.with_conn(|conn| append_signup(conn, id, signup))
    }
}
