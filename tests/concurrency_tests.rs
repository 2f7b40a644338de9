//! Concurrent admission tests for LocalRepository.
//!
//! The check-then-act race is the central correctness property of the whole
//! system: two concurrent admission attempts for overlapping ranges on the
//! same room must never both succeed. The store closes the race by holding
//! its exclusion scope across the overlap re-check and the insert; these
//! tests hammer that guarantee from many tasks at once.

mod support;

use std::sync::Arc;

use rbs_rust::api::{BookingRequest, RoomId};
use rbs_rust::db::repositories::LocalRepository;
use rbs_rust::db::services::{self, AdmissionOutcome, AdmissionRejection};

use support::{bucharest, fixture_now, seeded_repository, test_room};

#[tokio::test]
async fn concurrent_overlapping_admissions_one_winner() {
    let (repo, id) = seeded_repository("Luni-Vineri 09:00-18:00").await;
    let repo = Arc::new(repo);

    // Two tasks race for the exact same range.
    let mut handles = vec![];
    for _ in 0..2 {
        let repo = Arc::clone(&repo);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            services::admit_booking(
                repo.as_ref(),
                &BookingRequest {
                    room_id: id,
                    start: bucharest(13, 10, 0),
                    end: bucharest(13, 12, 0),
                },
                fixture_now(),
            )
            .await
        }));
    }

    let mut admitted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            AdmissionOutcome::Admitted(_) => admitted += 1,
            AdmissionOutcome::Rejected(AdmissionRejection::Conflict { .. }) => conflicts += 1,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    assert_eq!(admitted, 1, "exactly one admission must win");
    assert_eq!(conflicts, 1, "the loser must observe the conflict");
    assert_eq!(
        services::list_room_bookings(repo.as_ref(), &id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn many_racing_tasks_for_one_slot() {
    let (repo, id) = seeded_repository("Luni-Vineri 09:00-18:00").await;
    let repo = Arc::new(repo);

    let mut handles = vec![];
    for _ in 0..16 {
        let repo = Arc::clone(&repo);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            services::admit_booking(
                repo.as_ref(),
                &BookingRequest {
                    room_id: id,
                    start: bucharest(14, 9, 0),
                    end: bucharest(14, 17, 0),
                },
                fixture_now(),
            )
            .await
        }));
    }

    let mut admitted = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().is_admitted() {
            admitted += 1;
        }
    }
    assert_eq!(admitted, 1);
}

#[tokio::test]
async fn concurrent_disjoint_ranges_all_succeed() {
    let (repo, id) = seeded_repository("Luni-Vineri 09:00-18:00").await;
    let repo = Arc::new(repo);

    // Eight back-to-back one-hour slots across Monday working hours.
    let mut handles = vec![];
    for hour in 9..17 {
        let repo = Arc::clone(&repo);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            services::admit_booking(
                repo.as_ref(),
                &BookingRequest {
                    room_id: id,
                    start: bucharest(13, hour, 0),
                    end: bucharest(13, hour + 1, 0),
                },
                fixture_now(),
            )
            .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_admitted());
    }
    assert_eq!(
        services::list_room_bookings(repo.as_ref(), &id)
            .await
            .unwrap()
            .len(),
        8
    );
}

#[tokio::test]
async fn races_on_different_rooms_do_not_interfere() {
    let repo = Arc::new(LocalRepository::new());
    let mut ids: Vec<RoomId> = Vec::new();
    for i in 0..4 {
        let mut room = test_room("Luni-Vineri 09:00-18:00");
        room.name = format!("Sala {}", i);
        ids.push(services::store_room(repo.as_ref(), &room).await.unwrap());
    }

    // Same instant range in every room, two contenders per room.
    let mut handles = vec![];
    for id in &ids {
        for _ in 0..2 {
            let repo = Arc::clone(&repo);
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                services::admit_booking(
                    repo.as_ref(),
                    &BookingRequest {
                        room_id: id.clone(),
                        start: bucharest(15, 10, 0),
                        end: bucharest(15, 11, 0),
                    },
                    fixture_now(),
                )
                .await
                .map(|outcome| (id, outcome))
            }));
        }
    }

    let mut admitted_per_room = std::collections::HashMap::new();
    for handle in handles {
        let (id, outcome) = handle.await.unwrap().unwrap();
        if outcome.is_admitted() {
            *admitted_per_room.entry(id).or_insert(0u32) += 1;
        }
    }

    assert_eq!(admitted_per_room.len(), ids.len());
    for id in &ids {
        assert_eq!(admitted_per_room.get(id), Some(&1));
    }
}
