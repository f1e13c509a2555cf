//! Transport CRUD operations.

use domain::ValidTransport;
use sqlx::SqliteConnection;

use crate::{DbError, models::TransportRow};

/// Return every transport in insertion order.
pub async fn list_transports(conn: &mut SqliteConnection) -> Result<Vec<TransportRow>, DbError> {
    let rows = sqlx::query_as::<_, TransportRow>(
        "SELECT id, nombre, capacidad, tipo FROM transportes ORDER BY id ASC",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Fetch a single transport by its primary key.
pub async fn get_transport(conn: &mut SqliteConnection, id: i64) -> Result<TransportRow, DbError> {
    let row = sqlx::query_as::<_, TransportRow>(
        "SELECT id, nombre, capacidad, tipo FROM transportes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Insert a new transport and return it with its assigned id.
pub async fn create_transport(
    conn: &mut SqliteConnection,
    transport: &ValidTransport,
) -> Result<TransportRow, DbError> {
    let row = sqlx::query_as::<_, TransportRow>(
        r#"
        INSERT INTO transportes (nombre, capacidad, tipo)
        VALUES (?, ?, ?)
        RETURNING id, nombre, capacidad, tipo
        "#,
    )
    .bind(transport.nombre())
    .bind(transport.capacidad())
    .bind(transport.tipo())
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

/// Replace the mutable columns of an existing transport.
///
/// Returns `DbError::NotFound` if no row has `id`; nothing is written in
/// that case.
pub async fn update_transport(
    conn: &mut SqliteConnection,
    id: i64,
    transport: &ValidTransport,
) -> Result<TransportRow, DbError> {
    let mut row = get_transport(conn, id).await?;
    row.apply(transport);

    let row = sqlx::query_as::<_, TransportRow>(
        r#"
        UPDATE transportes
        SET nombre = ?, capacidad = ?, tipo = ?
        WHERE id = ?
        RETURNING id, nombre, capacidad, tipo
        "#,
    )
    .bind(row.nombre.as_str())
    .bind(row.capacidad)
    .bind(row.tipo.as_str())
    .bind(row.id)
    .fetch_optional(&mut *conn)
    .await?
    // Deleted by a concurrent request between the lookup and the write.
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a transport by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_transport(conn: &mut SqliteConnection, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM transportes WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{create_pool, ensure_schema, DbConfig, DbPool};
    use domain::TransportPayload;
    use tempfile::TempDir;

    async fn test_pool() -> (TempDir, DbPool) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let pool = create_pool(&DbConfig::new(url, 1)).await.expect("pool");
        ensure_schema(&pool).await.expect("schema");
        (dir, pool)
    }

    fn valid(nombre: &str, capacidad: i64, tipo: &str) -> ValidTransport {
        TransportPayload::new(nombre, capacidad, tipo)
            .validate()
            .expect("valid payload")
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");
        assert!(list_transports(&mut conn).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_lists_in_insertion_order() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let a = create_transport(&mut conn, &valid("Alfa", 10, "urbano")).await.expect("a");
        let b = create_transport(&mut conn, &valid("Beta", 20, "interurbano")).await.expect("b");
        let c = create_transport(&mut conn, &valid("Gamma", 30, "carga")).await.expect("c");

        assert!(a.id < b.id && b.id < c.id);
        let names: Vec<String> = list_transports(&mut conn)
            .await
            .expect("list")
            .into_iter()
            .map(|row| row.nombre)
            .collect();
        assert_eq!(names, vec!["Alfa", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");
        assert!(matches!(get_transport(&mut conn, 42).await, Err(DbError::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let created = create_transport(&mut conn, &valid("Bus", 40, "urbano")).await.expect("create");
        let updated = update_transport(&mut conn, created.id, &valid("Camion", 10, "carga"))
            .await
            .expect("update");

        let expected = TransportRow {
            id: created.id,
            nombre: "Camion".into(),
            capacidad: 10,
            tipo: "carga".into(),
        };
        assert_eq!(updated, expected);
        assert_eq!(get_transport(&mut conn, created.id).await.expect("get"), expected);
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_writes_nothing() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let result = update_transport(&mut conn, 9999, &valid("Camion", 10, "carga")).await;
        assert!(matches!(result, Err(DbError::NotFound)));
        assert!(list_transports(&mut conn).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row_then_reports_not_found() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let created = create_transport(&mut conn, &valid("Bus", 40, "urbano")).await.expect("create");
        delete_transport(&mut conn, created.id).await.expect("first delete");

        assert!(matches!(delete_transport(&mut conn, created.id).await, Err(DbError::NotFound)));
        assert!(matches!(delete_transport(&mut conn, created.id).await, Err(DbError::NotFound)));
        assert!(list_transports(&mut conn).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_dir, pool) = test_pool().await;
        let mut conn = pool.acquire().await.expect("conn");

        let _a = create_transport(&mut conn, &valid("Alfa", 1, "urbano")).await.expect("a");
        let b = create_transport(&mut conn, &valid("Beta", 2, "urbano")).await.expect("b");
        delete_transport(&mut conn, b.id).await.expect("delete");
        let c = create_transport(&mut conn, &valid("Gamma", 3, "urbano")).await.expect("c");

        assert!(c.id > b.id, "id {} was reused", c.id);
    }
}
