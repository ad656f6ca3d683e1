use std::collections::HashSet;
use vehicle_core::{
    EqualFilter, InMemoryVehicleRepository, RepoError, Vehicle, VehicleMap, VehicleRepository,
};

fn vehicle(registration: &str) -> Vehicle {
    Vehicle::new("Toyota", "Corolla", registration)
        .with_color("red")
        .with_fabrication_year(2018)
        .with_capacity(5)
        .with_max_speed(180.0)
        .with_fuel_type("gasoline")
        .with_transmission("manual")
        .with_weight(1300.0)
        .with_dimensions(1.4, 4.6, 1.8)
}

#[test]
fn first_added_vehicle_gets_id_one() {
    let repo = InMemoryVehicleRepository::new();

    let stored = repo.add(vehicle("AB-001")).unwrap();
    assert_eq!(stored.id, 1);
    assert!(stored.is_stored());
    assert_eq!(stored.registration, "AB-001");
}

#[test]
fn add_ignores_caller_supplied_id_and_assigns_unique_ids() {
    let repo = InMemoryVehicleRepository::new();

    let mut candidate = vehicle("AB-001");
    candidate.id = 42;
    let first = repo.add(candidate).unwrap();
    let second = repo.add(vehicle("AB-002")).unwrap();
    let third = repo.add(vehicle("AB-003")).unwrap();

    assert_eq!(first.id, 1);
    let ids: HashSet<_> = [first.id, second.id, third.id].into_iter().collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| *id > 0));
}

#[test]
fn add_continues_after_highest_seeded_id() {
    let mut seed = VehicleMap::new();
    seed.insert(4, vehicle("AB-004"));
    seed.insert(10, vehicle("AB-010"));
    let repo = InMemoryVehicleRepository::with_vehicles(seed).unwrap();

    let stored = repo.add(vehicle("AB-011")).unwrap();
    assert_eq!(stored.id, 11);
}

#[test]
fn seeded_records_take_their_key_as_id() {
    let mut seed = VehicleMap::new();
    seed.insert(7, vehicle("AB-007"));
    let repo = InMemoryVehicleRepository::with_vehicles(seed).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all[&7].id, 7);
}

#[test]
fn seeding_rejects_reserved_id_zero() {
    let mut seed = VehicleMap::new();
    seed.insert(0, vehicle("AB-000"));
    seed.insert(1, vehicle("AB-001"));

    let err = InMemoryVehicleRepository::with_vehicles(seed).unwrap_err();
    assert_eq!(err, RepoError::ReservedId(0));
}

#[test]
fn seeding_rejects_duplicate_registrations() {
    let mut seed = VehicleMap::new();
    seed.insert(1, vehicle("AB-001"));
    seed.insert(2, vehicle("AB-001"));

    let err = InMemoryVehicleRepository::with_vehicles(seed).unwrap_err();
    assert_eq!(
        err,
        RepoError::VehicleExistent {
            registration: "AB-001".to_string()
        }
    );
}

#[test]
fn seeding_allows_repeated_empty_registrations() {
    let mut seed = VehicleMap::new();
    seed.insert(1, vehicle(""));
    seed.insert(2, vehicle(""));

    let repo = InMemoryVehicleRepository::with_vehicles(seed).unwrap();
    assert_eq!(repo.len().unwrap(), 2);
}

#[test]
fn add_after_highest_possible_id_fails_and_store_stays_usable() {
    let mut seed = VehicleMap::new();
    seed.insert(u64::MAX, vehicle("AB-MAX"));
    let repo = InMemoryVehicleRepository::with_vehicles(seed).unwrap();

    let err = repo.add(vehicle("AB-002")).unwrap_err();
    assert_eq!(err, RepoError::IdSpaceExhausted);
    assert_eq!(repo.len().unwrap(), 1);

    let mut stored = repo.find_all().unwrap()[&u64::MAX].clone();
    stored.color = "black".to_string();
    assert_eq!(repo.update(stored).unwrap().color, "black");
    assert!(repo.find_all_equal_to(&EqualFilter::default()).is_ok());
}

#[test]
fn duplicate_registration_is_rejected_and_store_unchanged() {
    let repo = InMemoryVehicleRepository::new();
    repo.add(vehicle("AB-001")).unwrap();
    let before = repo.find_all().unwrap();

    let err = repo.add(vehicle("AB-001")).unwrap_err();
    assert_eq!(
        err,
        RepoError::VehicleExistent {
            registration: "AB-001".to_string()
        }
    );
    assert_eq!(repo.find_all().unwrap(), before);
    assert_eq!(repo.len().unwrap(), 1);
}

#[test]
fn find_all_returns_independent_copies() {
    let repo = InMemoryVehicleRepository::new();
    repo.add(vehicle("AB-001")).unwrap();

    let mut snapshot = repo.find_all().unwrap();
    snapshot.get_mut(&1).unwrap().registration = "HIJACKED".to_string();
    snapshot.clear();

    let fresh = repo.find_all().unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[&1].registration, "AB-001");
}

#[test]
fn update_replaces_every_attribute_and_keeps_id() {
    let repo = InMemoryVehicleRepository::new();
    let stored = repo.add(vehicle("AB-001")).unwrap();

    let mut replacement = Vehicle::new("Ford", "Focus", "ZZ-999")
        .with_color("blue")
        .with_fabrication_year(2021)
        .with_capacity(4)
        .with_max_speed(200.0)
        .with_fuel_type("diesel")
        .with_transmission("automatic")
        .with_weight(1400.0)
        .with_dimensions(1.5, 4.4, 1.9);
    replacement.id = stored.id;

    let updated = repo.update(replacement.clone()).unwrap();
    assert_eq!(updated, replacement);
    assert_eq!(repo.find_all().unwrap()[&stored.id], replacement);
    assert_eq!(repo.len().unwrap(), 1);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let repo = InMemoryVehicleRepository::new();
    repo.add(vehicle("AB-001")).unwrap();

    let mut missing = vehicle("AB-002");
    missing.id = 99;
    assert_eq!(
        repo.update(missing).unwrap_err(),
        RepoError::VehicleNotFound(99)
    );
}

#[test]
fn update_to_registration_of_other_vehicle_is_rejected() {
    let repo = InMemoryVehicleRepository::new();
    repo.add(vehicle("AB-001")).unwrap();
    let second = repo.add(vehicle("AB-002")).unwrap();

    let mut clash = second.clone();
    clash.registration = "AB-001".to_string();
    let err = repo.update(clash).unwrap_err();
    assert!(matches!(err, RepoError::VehicleExistent { .. }));
    assert_eq!(repo.find_all().unwrap()[&second.id], second);
}

#[test]
fn update_keeping_own_registration_succeeds() {
    let repo = InMemoryVehicleRepository::new();
    let mut stored = repo.add(vehicle("AB-001")).unwrap();

    stored.color = "black".to_string();
    let updated = repo.update(stored.clone()).unwrap();
    assert_eq!(updated.color, "black");
    assert_eq!(updated.registration, "AB-001");
}

#[test]
fn repository_is_usable_through_shared_references_across_threads() {
    let repo = InMemoryVehicleRepository::new();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let repo = &repo;
            scope.spawn(move || {
                for n in 0..25 {
                    repo.add(vehicle(&format!("T{worker}-{n}"))).unwrap();
                }
            });
        }
    });

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 100);
    let max_id = all.keys().copied().max().unwrap();
    assert_eq!(max_id, 100);
}
