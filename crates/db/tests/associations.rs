//! Integration tests for association writes through the coordinator.
//!
//! Both referenced entities must exist before a link is written or changed.

use assert_matches::assert_matches;
use roster_core::error::CoreError;
use roster_db::models::association::{
    CreatePersonOrganization, CreatePersonWork, UpdatePersonOrganization, UpdatePersonWork,
};
use roster_db::models::organization::{CreateOrganization, Organization};
use roster_db::models::person::{CreatePerson, Person};
use roster_db::models::work::{CreateWork, Work};
use roster_db::{DataError, Repositories};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

struct Fixture {
    person: Person,
    organization: Organization,
    work: Work,
}

async fn seed(repos: &mut Repositories) -> Fixture {
    let person = repos
        .people()
        .create(&CreatePerson {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.test".to_string(),
            minimum_fee: 500,
        })
        .await
        .unwrap();
    let organization = repos
        .organizations()
        .create(&CreateOrganization {
            name: "Acme".to_string(),
            contact_email_address: "a@acme.test".to_string(),
            phone_number: "555-0100".to_string(),
        })
        .await
        .unwrap();
    let work = repos
        .works()
        .create(&CreateWork {
            title: "Heist".to_string(),
            description: "A careful plan goes wrong.".to_string(),
            budget: 1_000_000,
            release_year: 2024,
            genres: vec!["thriller".to_string()],
            organization_id: organization.id,
        })
        .await
        .unwrap();
    Fixture {
        person,
        organization,
        work,
    }
}

async fn person_work_count(pool: &SqlitePool, person_id: i64) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM person_works WHERE person_id = ?")
        .bind(person_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

// ---------------------------------------------------------------------------
// Person <-> Work
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_person_work(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    let link = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(link.person_id, fx.person.id);
    assert_eq!(link.work_id, fx.work.id);
    assert_eq!(link.role.as_deref(), Some("writer"));
    assert_eq!(repos.person_works().get(link.id).await.unwrap(), Some(link));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_person_work_with_missing_work_is_rejected(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let before = person_work_count(&pool, fx.person.id).await;

    let err = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id + 100,
            role: "director".to_string(),
        })
        .await
        .unwrap_err();

    assert_matches!(
        err,
        DataError::Core(CoreError::NotFound { entity: "Work", .. })
    );
    assert_eq!(person_work_count(&pool, fx.person.id).await, before);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_person_work_with_missing_person_is_rejected(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    let err = repos
        .create_person_work(&CreatePersonWork {
            person_id: 9_999,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap_err();

    assert_matches!(
        err,
        DataError::Core(CoreError::NotFound { entity: "Person", id: 9_999 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_pair_may_hold_several_roles(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    for role in ["writer", "director"] {
        repos
            .create_person_work(&CreatePersonWork {
                person_id: fx.person.id,
                work_id: fx.work.id,
                role: role.to_string(),
            })
            .await
            .unwrap();
    }

    assert_eq!(person_work_count(&pool, fx.person.id).await, 2);
    // Navigation collapses the pair to one work.
    let works = repos.works_of_person(fx.person.id).await.unwrap();
    assert_eq!(works, vec![fx.work]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_person_work_role(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let link = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap();

    let updated = repos
        .update_person_work(
            link.id,
            UpdatePersonWork {
                role: Some(Some("producer".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, link.id);
    assert_eq!(updated.role.as_deref(), Some("producer"));
    assert_eq!(updated.work_id, fx.work.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_person_work_to_missing_work_leaves_row_unchanged(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let link = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap();

    let err = repos
        .update_person_work(
            link.id,
            UpdatePersonWork {
                work_id: Some(fx.work.id + 50),
                role: Some(Some("editor".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_matches!(
        err,
        DataError::Core(CoreError::NotFound { entity: "Work", .. })
    );
    assert_eq!(repos.person_works().get(link.id).await.unwrap(), Some(link));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_person_work_is_not_found(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    seed(&mut repos).await;

    let err = repos
        .update_person_work(77, UpdatePersonWork::default())
        .await
        .unwrap_err();

    assert_matches!(
        err,
        DataError::Core(CoreError::NotFound { entity: "PersonWork", id: 77 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_overlong_role_is_rejected_by_store(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    let err = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "cinematographer".to_string(),
        })
        .await
        .unwrap_err();

    assert_matches!(err, DataError::Store(sqlx::Error::Database(_)));
    assert_eq!(person_work_count(&pool, fx.person.id).await, 0);
}

// ---------------------------------------------------------------------------
// Person <-> Organization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_update_person_organization(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    let link = repos
        .create_person_organization(&CreatePersonOrganization {
            person_id: fx.person.id,
            organization_id: fx.organization.id,
            role: "member".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(link.role, "member");

    let updated = repos
        .update_person_organization(
            link.id,
            UpdatePersonOrganization {
                role: Some("owner".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, "owner");
    assert_eq!(updated.organization_id, fx.organization.id);

    let organizations = repos.organizations_of_person(fx.person.id).await.unwrap();
    assert_eq!(organizations, vec![fx.organization]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_person_organization_with_missing_organization_is_rejected(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;

    let err = repos
        .create_person_organization(&CreatePersonOrganization {
            person_id: fx.person.id,
            organization_id: 4_242,
            role: "owner".to_string(),
        })
        .await
        .unwrap_err();

    assert_matches!(
        err,
        DataError::Core(CoreError::NotFound { entity: "Organization", id: 4_242 })
    );
    assert!(repos.organizations_of_person(fx.person.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_person_work_null_role_clears_it(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let link = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap();

    let updated = repos
        .update_person_work(
            link.id,
            UpdatePersonWork {
                role: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.role, None);
    assert_eq!(repos.person_works().get(link.id).await.unwrap().unwrap().role, None);
}

// ---------------------------------------------------------------------------
// Deleting linked entities
// ---------------------------------------------------------------------------

async fn link_everything(repos: &mut Repositories, fx: &Fixture) -> (i64, i64) {
    let work_link = repos
        .create_person_work(&CreatePersonWork {
            person_id: fx.person.id,
            work_id: fx.work.id,
            role: "writer".to_string(),
        })
        .await
        .unwrap();
    let organization_link = repos
        .create_person_organization(&CreatePersonOrganization {
            person_id: fx.person.id,
            organization_id: fx.organization.id,
            role: "member".to_string(),
        })
        .await
        .unwrap();
    (work_link.id, organization_link.id)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_person_holding_roles_removes_person_and_links(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let (work_link, organization_link) = link_everything(&mut repos, &fx).await;

    let deleted = repos.people().delete(fx.person.id).await.unwrap();
    assert_eq!(deleted, Some(fx.person.clone()));
    assert!(repos.people().get(fx.person.id).await.unwrap().is_none());

    assert!(repos.person_works().get(work_link).await.unwrap().is_none());
    assert!(repos.person_organizations().get(organization_link).await.unwrap().is_none());
    assert_eq!(repos.works().get(fx.work.id).await.unwrap(), Some(fx.work));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_work_with_credits_removes_its_links(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let (work_link, organization_link) = link_everything(&mut repos, &fx).await;

    assert!(repos.works().delete(fx.work.id).await.unwrap().is_some());
    assert!(repos.works().get(fx.work.id).await.unwrap().is_none());

    assert!(repos.person_works().get(work_link).await.unwrap().is_none());
    assert!(repos.works_of_person(fx.person.id).await.unwrap().is_empty());
    assert!(repos.person_organizations().get(organization_link).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_organization_with_members_and_works(pool: SqlitePool) {
    let mut repos = Repositories::acquire(&pool).await.unwrap();
    let fx = seed(&mut repos).await;
    let (work_link, organization_link) = link_everything(&mut repos, &fx).await;

    assert!(repos.organizations().delete(fx.organization.id).await.unwrap().is_some());
    assert!(repos.organizations().get(fx.organization.id).await.unwrap().is_none());

    assert!(repos.person_organizations().get(organization_link).await.unwrap().is_none());
    assert!(repos.organizations_of_person(fx.person.id).await.unwrap().is_empty());

    let work = repos.works().get(fx.work.id).await.unwrap().unwrap();
    assert_eq!(work.organization_id, None);
    assert!(repos.person_works().get(work_link).await.unwrap().is_some());
}
