use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::enrollment::EnrollmentStatus;
use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let cfg = AuthConfig {
        jwt_secret: "secret".into(),
        token_ttl_hours: 8,
        password_algorithm: "bcrypt".into(),
        bcrypt_cost: 4,
    };
    let svc = AuthService::new(repo.clone(), cfg).unwrap();

    // pre-create and approve the user outside of the benchmark
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.register(RegisterInput {
        first_name: "Bench".into(),
        paternal_surname: "Mark".into(),
        maternal_surname: String::new(),
        email: "bench@example.com".into(),
        password: "Benchmark1".into(),
        major_id: None,
        division_id: None,
        term: 1,
        role_id: 3,
    }))
    .unwrap();
    repo.set_status("bench@example.com", EnrollmentStatus::Approved);

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            rt.block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() }))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
