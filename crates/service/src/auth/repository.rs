use async_trait::async_trait;
use chrono::NaiveDate;
use models::user::NewUser;

use super::domain::{AuthUser, LoginRecord};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// User (by normalized email) together with its hash and enrollment status.
    async fn find_login_record(&self, email: &str) -> Result<Option<LoginRecord>, AuthError>;

    async fn find_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;

    /// Insert the user and its `pending` enrollment as one unit: either both
    /// rows exist afterwards or neither does. An email that is already taken
    /// yields [`AuthError::DuplicateEmail`].
    async fn register_with_enrollment(&self, user: NewUser, enrolled_on: NaiveDate) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::enrollment::{EnrollmentStatus, PRIORITY_NORMAL};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockEnrollment {
        pub status: EnrollmentStatus,
        pub priority: String,
        pub enrolled_on: NaiveDate,
    }

    #[derive(Default)]
    struct State {
        next_id: i32,
        users: HashMap<String, (AuthUser, String)>, // key: normalized email
        enrollments: HashMap<i32, MockEnrollment>,  // key: user id
    }

    #[derive(Default)]
    pub struct MockAuthRepository {
        state: Mutex<State>,
        fail_enrollment: AtomicBool,
    }

    impl MockAuthRepository {
        fn lock(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        /// Make the next enrollment insert fail, as a broken table would.
        pub fn fail_next_enrollment(&self) {
            self.fail_enrollment.store(true, Ordering::SeqCst);
        }

        /// Stand-in for the external approval process.
        pub fn set_status(&self, email: &str, status: EnrollmentStatus) -> bool {
            let mut st = self.lock();
            let Some(id) = st.users.get(email).map(|(u, _)| u.id) else { return false };
            match st.enrollments.get_mut(&id) {
                Some(e) => { e.status = status; true }
                None => false,
            }
        }

        pub fn enrollment_of(&self, user_id: i32) -> Option<MockEnrollment> {
            self.lock().enrollments.get(&user_id).cloned()
        }

        pub fn user_count(&self) -> usize { self.lock().users.len() }

        pub fn enrollment_count(&self) -> usize { self.lock().enrollments.len() }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_login_record(&self, email: &str) -> Result<Option<LoginRecord>, AuthError> {
            let st = self.lock();
            Ok(st.users.get(email).map(|(user, hash)| LoginRecord {
                user: user.clone(),
                password_hash: hash.clone(),
                enrollment_status: st.enrollments.get(&user.id).map(|e| e.status.clone()),
            }))
        }

        async fn find_user(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock().users.values().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
        }

        async fn register_with_enrollment(&self, user: NewUser, enrolled_on: NaiveDate) -> Result<AuthUser, AuthError> {
            let mut st = self.lock();
            if st.users.contains_key(&user.correo) {
                return Err(AuthError::DuplicateEmail);
            }
            // Checked before touching state so a failure leaves nothing behind.
            if self.fail_enrollment.swap(false, Ordering::SeqCst) {
                return Err(AuthError::Repository("enrollment insert failed".into()));
            }
            st.next_id += 1;
            let created = AuthUser {
                id: st.next_id,
                first_name: user.nombre,
                paternal_surname: user.apellido_paterno,
                maternal_surname: user.apellido_materno,
                email: user.correo.clone(),
                major_id: user.id_carrera,
                division_id: user.id_division,
                term: user.cuatrimestre,
                role_id: user.id_rol,
            };
            st.users.insert(user.correo, (created.clone(), user.contrasena));
            st.enrollments.insert(
                created.id,
                MockEnrollment { status: EnrollmentStatus::Pending, priority: PRIORITY_NORMAL.into(), enrolled_on },
            );
            Ok(created)
        }
    }
}
