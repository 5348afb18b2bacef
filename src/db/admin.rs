//! Admin database operations for authentication

use super::AppState;
use crate::auth::model::Admin;
use uuid::Uuid;

impl AppState {
    /// Get count of admins in database
    pub async fn get_admin_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
    }

    /// Get admin by username
    pub async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, username, password_hash, display_name, role, refresh_token,
                   created_at, updated_at
            FROM admins WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Get admin by refresh token
    pub async fn get_admin_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, username, password_hash, display_name, role, refresh_token,
                   created_at, updated_at
            FROM admins WHERE refresh_token = $1
            "#,
        )
        .bind(refresh_token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Update admin's refresh token (invalidates previous sessions)
    pub async fn update_admin_refresh_token(
        &self,
        admin_id: &Uuid,
        refresh_token: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admins SET refresh_token = $1, updated_at = NOW() WHERE id = $2")
            .bind(refresh_token)
            .bind(admin_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clear the refresh token on logout
    pub async fn clear_admin_refresh_token(&self, admin_id: &Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admins SET refresh_token = NULL, updated_at = NOW() WHERE id = $1")
            .bind(admin_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::model::Admin;
    use uuid::Uuid;

    // Note: query paths require a running database; covered by the ignored
    // integration tests under tests/.

    #[test]
    fn test_admin_model_clone() {
        let admin = Admin {
            id: Uuid::new_v4(),
            username: "coordinacion".to_string(),
            password_hash: "hash".to_string(),
            display_name: Some("Coordinación de Capacitación".to_string()),
            role: "admin".to_string(),
            refresh_token: None,
            created_at: None,
            updated_at: None,
        };

        let cloned = admin.clone();
        assert_eq!(admin.id, cloned.id);
        assert_eq!(admin.username, cloned.username);
        assert!(cloned.es_admin());
    }
}
