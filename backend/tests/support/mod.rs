#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use teamcat::api::{
    CatalogSnapshot, ChangeStamp, Cluster, ClusterId, Resource, ResourceType, Status, Team,
    TeamId, TeamMember, TeamRole,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Catalog fixtures
// =============================================================================

pub fn resource(ident: &str, resource_type: ResourceType) -> Resource {
    Resource {
        nav_ident: ident.to_string(),
        given_name: None,
        family_name: None,
        email: None,
        resource_type: Some(resource_type),
    }
}

pub fn member(ident: &str, resource_type: ResourceType, roles: &[TeamRole]) -> TeamMember {
    TeamMember {
        nav_ident: ident.to_string(),
        roles: roles.to_vec(),
        description: None,
        resource: resource(ident, resource_type),
    }
}

/// Active team with `external` external and `internal` internal members.
///
/// Member idents are prefixed with the team name so teams never share people.
pub fn team(name: &str, external: usize, internal: usize) -> Team {
    let members = (0..external)
        .map(|i| member(&format!("{name}-E{i}"), ResourceType::External, &[TeamRole::Developer]))
        .chain((0..internal).map(|i| {
            member(&format!("{name}-I{i}"), ResourceType::Internal, &[TeamRole::Developer])
        }))
        .collect();

    Team {
        id: TeamId::generate(),
        name: name.to_string(),
        description: None,
        product_area_id: None,
        cluster_ids: vec![],
        status: Status::Active,
        members,
        change_stamp: Some(ChangeStamp {
            last_modified_by: "S000001".to_string(),
            last_modified_date: chrono::Utc::now(),
        }),
    }
}

pub fn cluster(name: &str) -> Cluster {
    Cluster {
        id: ClusterId::generate(),
        name: name.to_string(),
        description: None,
        product_area_id: None,
        tags: vec![],
        members: vec![],
        change_stamp: None,
    }
}

/// Five teams whose external shares are 0, 0, 10, 30 and 80 percent.
pub fn reference_teams() -> Vec<Team> {
    vec![
        team("Alfa", 0, 5),
        team("Bravo", 0, 0),
        team("Charlie", 1, 9),
        team("Delta", 3, 7),
        team("Echo", 4, 1),
    ]
}

pub fn snapshot(teams: Vec<Team>) -> CatalogSnapshot {
    let resources = teams
        .iter()
        .flat_map(|t| t.members.iter().map(|m| m.resource.clone()))
        .collect();
    CatalogSnapshot {
        teams,
        product_areas: vec![],
        clusters: vec![],
        resources,
    }
}
