use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait};
use tracing::warn;

use models::{enrollment, user::{self, NewUser}};

use crate::auth::domain::{AuthUser, LoginRecord};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn insert_pair(txn: &DatabaseTransaction, new_user: NewUser, enrolled_on: NaiveDate) -> Result<AuthUser, AuthError> {
        if user::find_by_email(txn, &new_user.correo).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }
        let created = user::create(txn, new_user).await?;
        enrollment::create_pending(txn, created.id_usuario, enrolled_on).await?;
        Ok(created.into())
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_login_record(&self, email: &str) -> Result<Option<LoginRecord>, AuthError> {
        let found = user::find_with_enrollment(&self.db, email).await?;
        Ok(found.map(|(u, enr)| {
            let password_hash = u.contrasena.clone();
            LoginRecord {
                enrollment_status: enr.map(|e| e.status()),
                password_hash,
                user: u.into(),
            }
        }))
    }

    async fn find_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        let found = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(AuthUser::from))
    }

    async fn register_with_enrollment(&self, new_user: NewUser, enrolled_on: NaiveDate) -> Result<AuthUser, AuthError> {
        let txn = self.db.begin().await?;
        match Self::insert_pair(&txn, new_user, enrolled_on).await {
            Ok(created) => {
                txn.commit().await?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(event = "rollback_failed", error = %rb, "registration rollback failed");
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::enrollment::EnrollmentStatus;
    use sea_orm::{ConnectionTrait, PaginatorTrait};

    use crate::test_support::{get_db, new_user};

    fn day() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 8, 26).unwrap() }

    #[tokio::test]
    async fn writes_user_and_pending_enrollment() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo = SeaOrmAuthRepository::new(db.clone());

        let created = repo.register_with_enrollment(new_user("ana@test.com"), day()).await?;
        let rows = enrollment::Entity::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id_usuario, created.id);
        assert_eq!(rows[0].status(), EnrollmentStatus::Pending);
        assert_eq!(rows[0].prioridad, "normal");
        assert_eq!(rows[0].fecha_inscripcion, day());

        let rec = repo.find_login_record("ana@test.com").await?.unwrap();
        assert_eq!(rec.user, created);
        assert_eq!(rec.enrollment_status, Some(EnrollmentStatus::Pending));
        assert_eq!(repo.find_user(created.id).await?, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_is_detected_inside_transaction() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo = SeaOrmAuthRepository::new(db.clone());

        repo.register_with_enrollment(new_user("dup@test.com"), day()).await?;
        let err = repo.register_with_enrollment(new_user("dup@test.com"), day()).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(user::Entity::find().count(&db).await?, 1);
        assert_eq!(enrollment::Entity::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_enrollment_insert_leaves_no_user() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo = SeaOrmAuthRepository::new(db.clone());
        db.execute_unprepared("DROP TABLE inscripciones").await?;

        let err = repo.register_with_enrollment(new_user("atomic@test.com"), day()).await.unwrap_err();
        assert!(matches!(err, AuthError::Repository(_)), "got {err:?}");
        assert_eq!(user::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn failed_user_insert_leaves_no_enrollment() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo = SeaOrmAuthRepository::new(db.clone());

        let mut bad = new_user("fk@test.com");
        bad.id_carrera = Some(9999);
        assert!(repo.register_with_enrollment(bad, day()).await.is_err());
        assert_eq!(user::Entity::find().count(&db).await?, 0);
        assert_eq!(enrollment::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_has_no_record() -> anyhow::Result<()> {
        let db = get_db().await?;
        let repo = SeaOrmAuthRepository::new(db);
        assert!(repo.find_login_record("nadie@test.com").await?.is_none());
        assert!(repo.find_user(7).await?.is_none());
        Ok(())
    }
}
