//! Service tests for first sign-in registration.

use std::sync::Arc;

use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::UserId,
    ports::UserRepositoryError,
    services::UserService,
};
use rstest::{fixture, rstest};

type TestService = UserService<InMemoryUserRepository>;

#[fixture]
fn service() -> TestService {
    UserService::new(Arc::new(InMemoryUserRepository::new()))
}

#[rstest]
#[tokio::test]
async fn create_user_registers_identity_as_given(service: TestService) {
    let id = UserId::new("eu-west-1:7f3c2a10-Case-Preserved");

    service
        .create_user(&id)
        .await
        .expect("user creation should succeed");
    let user = service.get_user(&id).await.expect("user should exist");

    assert_eq!(user.id(), &id);
    assert_eq!(user.id().as_str(), "eu-west-1:7f3c2a10-Case-Preserved");
}

#[rstest]
#[tokio::test]
async fn duplicate_identity_is_rejected(service: TestService) {
    let id = UserId::new("subject-1");
    service
        .create_user(&id)
        .await
        .expect("first creation should succeed");

    let result = service.create_user(&id).await;

    assert!(matches!(
        result,
        Err(UserRepositoryError::DuplicateUser(ref duplicate)) if duplicate == &id
    ));
}

#[rstest]
#[tokio::test]
async fn get_user_reports_unknown_identity(service: TestService) {
    let result = service.get_user(&UserId::new("never-signed-in")).await;

    assert!(matches!(result, Err(UserRepositoryError::NotFound(_))));
}
