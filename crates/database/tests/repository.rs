use chrono::NaiveDate;
use core_types::{
    AnimalPatch, AnimalStatus, NewAnimal, NewBreedingRecord, NewEggProduction, NewFeedRecord,
    NewHealthRecord, NewMilkProduction, NewOffspring, NewVaccination, NewWeightRecord,
};
use database::{connect, run_migrations, DbError, DbRepository, RecordFilter};

async fn test_repo() -> DbRepository {
    let pool = connect(":memory:").await.expect("failed to open in-memory database");
    run_migrations(&pool).await.expect("failed to run migrations");
    DbRepository::new(pool)
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn animal(tag: &str) -> NewAnimal {
    NewAnimal {
        tag_number: tag.to_string(),
        name: Some("Bessie".to_string()),
        species: "Cattle".to_string(),
        breed: Some("Holstein".to_string()),
        gender: Some("Female".to_string()),
        date_of_birth: Some(date("2020-01-15")),
        weight: Some(550.0),
        color: Some("Black and White".to_string()),
        acquisition_date: Some(date("2020-02-01")),
        acquisition_type: Some("Purchase".to_string()),
        source: Some("Green Valley Farm".to_string()),
        cost: Some(1500.0),
        notes: Some("Calm temperament".to_string()),
    }
}

fn health_record(animal_id: i64, record_date: &str) -> NewHealthRecord {
    NewHealthRecord {
        animal_id,
        record_date: date(record_date),
        record_type: "Checkup".to_string(),
        veterinarian: Some("Dr. Sarah Johnson".to_string()),
        ..NewHealthRecord::default()
    }
}

#[tokio::test]
async fn create_then_get_round_trips_supplied_fields() {
    let repo = test_repo().await;
    let new = animal("C001");

    let id = repo.add_animal(&new).await.expect("insert failed");
    let stored = repo
        .get_animal(id)
        .await
        .expect("lookup failed")
        .expect("animal missing after insert");

    assert_eq!(stored.id, id);
    assert_eq!(stored.tag_number, new.tag_number);
    assert_eq!(stored.name, new.name);
    assert_eq!(stored.species, new.species);
    assert_eq!(stored.breed, new.breed);
    assert_eq!(stored.gender, new.gender);
    assert_eq!(stored.date_of_birth, new.date_of_birth);
    assert_eq!(stored.weight, new.weight);
    assert_eq!(stored.cost, new.cost);
    assert_eq!(stored.notes, new.notes);
    // Store-assigned defaults.
    assert_eq!(stored.status, AnimalStatus::Active);
}

#[tokio::test]
async fn get_missing_animal_is_none_not_error() {
    let repo = test_repo().await;
    let found = repo.get_animal(424242).await.expect("lookup failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn duplicate_tag_number_is_a_constraint_violation() {
    let repo = test_repo().await;
    repo.add_animal(&animal("C001")).await.expect("first insert failed");

    let second = repo.add_animal(&animal("C001")).await;
    assert!(matches!(second, Err(DbError::ConstraintViolation(_))));

    // Exactly one such animal survives.
    let animals = repo.get_all_animals().await.expect("list failed");
    assert_eq!(animals.len(), 1);
}

#[tokio::test]
async fn tag_uniqueness_spans_deleted_animals() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");
    repo.soft_delete_animal(id).await.expect("delete failed");

    let second = repo.add_animal(&animal("C001")).await;
    assert!(matches!(second, Err(DbError::ConstraintViolation(_))));
}

#[tokio::test]
async fn soft_delete_is_idempotent_and_non_destructive() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");
    repo.add_health_record(&health_record(id, "2024-01-10"))
        .await
        .expect("health insert failed");

    repo.soft_delete_animal(id).await.expect("first delete failed");
    repo.soft_delete_animal(id).await.expect("second delete failed");

    let stored = repo.get_animal(id).await.expect("lookup failed").expect("row gone");
    assert_eq!(stored.status, AnimalStatus::Deleted);

    // History rows referencing the animal remain retrievable unchanged.
    let history = repo
        .get_health_records_by_animal(id)
        .await
        .expect("history lookup failed");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].animal_id, id);
}

#[tokio::test]
async fn soft_delete_of_unknown_animal_is_not_found() {
    let repo = test_repo().await;
    let result = repo.soft_delete_animal(99).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn update_of_missing_animal_returns_not_found() {
    let repo = test_repo().await;
    let patch = AnimalPatch {
        name: Some("Ghost".to_string()),
        ..AnimalPatch::default()
    };
    let result = repo.update_animal(9999, &patch).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn update_applies_only_the_patched_fields() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");

    let patch = AnimalPatch {
        name: Some("Clarabelle".to_string()),
        weight: Some(560.0),
        ..AnimalPatch::default()
    };
    repo.update_animal(id, &patch).await.expect("update failed");

    let stored = repo.get_animal(id).await.expect("lookup failed").expect("row gone");
    assert_eq!(stored.name.as_deref(), Some("Clarabelle"));
    assert_eq!(stored.weight, Some(560.0));
    // Untouched fields keep their values.
    assert_eq!(stored.tag_number, "C001");
    assert_eq!(stored.breed.as_deref(), Some("Holstein"));
}

#[tokio::test]
async fn foreign_keys_are_enforced_at_insert_time() {
    let repo = test_repo().await;
    let result = repo.add_health_record(&health_record(12345, "2024-01-10")).await;
    assert!(matches!(result, Err(DbError::ConstraintViolation(_))));
}

#[tokio::test]
async fn animals_list_in_tag_order() {
    let repo = test_repo().await;
    for tag in ["C003", "C001", "S002", "C002"] {
        let mut new = animal(tag);
        new.name = Some(tag.to_string());
        repo.add_animal(&new).await.expect("insert failed");
    }

    let animals = repo.get_all_animals().await.expect("list failed");
    let tags: Vec<&str> = animals.iter().map(|a| a.tag_number.as_str()).collect();
    assert_eq!(tags, vec!["C001", "C002", "C003", "S002"]);
}

#[tokio::test]
async fn feed_records_filter_by_inclusive_date_range() {
    let repo = test_repo().await;
    for day in ["2024-03-01", "2024-03-05", "2024-03-10", "2024-03-15"] {
        repo.add_feed_record(&NewFeedRecord {
            record_date: date(day),
            animal_id: None,
            feed_type: "Hay".to_string(),
            quantity: 10.0,
            ..NewFeedRecord::default()
        })
        .await
        .expect("insert failed");
    }

    let filter = RecordFilter {
        start_date: Some(date("2024-03-05")),
        end_date: Some(date("2024-03-10")),
        ..RecordFilter::default()
    };
    let records = repo.get_feed_records(&filter).await.expect("list failed");

    // Both boundary dates included, newest first.
    let dates: Vec<String> = records.iter().map(|r| r.record_date.to_string()).collect();
    assert_eq!(dates, vec!["2024-03-10", "2024-03-05"]);
}

#[tokio::test]
async fn feed_records_filter_by_animal() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");

    repo.add_feed_record(&NewFeedRecord {
        record_date: date("2024-03-01"),
        animal_id: Some(id),
        feed_type: "Hay".to_string(),
        quantity: 15.0,
        ..NewFeedRecord::default()
    })
    .await
    .expect("insert failed");
    // Herd-wide event, no animal id.
    repo.add_feed_record(&NewFeedRecord {
        record_date: date("2024-03-01"),
        animal_id: None,
        feed_type: "Grain".to_string(),
        quantity: 50.0,
        ..NewFeedRecord::default()
    })
    .await
    .expect("insert failed");

    let filter = RecordFilter {
        animal_id: Some(id),
        ..RecordFilter::default()
    };
    let records = repo.get_feed_records(&filter).await.expect("list failed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].feed_type, "Hay");
}

#[tokio::test]
async fn weight_records_list_oldest_first() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");

    for (day, weight) in [("2024-03-01", 550.0), ("2024-01-01", 530.0), ("2024-02-01", 540.0)] {
        repo.add_weight_record(&NewWeightRecord {
            animal_id: id,
            weight_date: date(day),
            weight,
            body_condition_score: None,
            notes: None,
        })
        .await
        .expect("insert failed");
    }

    let records = repo
        .get_weight_records_by_animal(id)
        .await
        .expect("list failed");
    let weights: Vec<f64> = records.iter().map(|r| r.weight).collect();
    assert_eq!(weights, vec![530.0, 540.0, 550.0]);
}

#[tokio::test]
async fn breeding_records_match_dam_or_sire() {
    let repo = test_repo().await;
    let dam = repo.add_animal(&animal("C001")).await.expect("insert failed");
    let sire = repo.add_animal(&animal("C003")).await.expect("insert failed");
    let other = repo.add_animal(&animal("C002")).await.expect("insert failed");

    repo.add_breeding_record(&NewBreedingRecord {
        dam_id: dam,
        sire_id: Some(sire),
        breeding_date: date("2024-02-14"),
        success: Some(true),
        ..NewBreedingRecord::default()
    })
    .await
    .expect("insert failed");
    repo.add_breeding_record(&NewBreedingRecord {
        dam_id: other,
        sire_id: Some(sire),
        breeding_date: date("2024-03-01"),
        ..NewBreedingRecord::default()
    })
    .await
    .expect("insert failed");

    let as_dam = repo
        .get_breeding_records_by_animal(dam)
        .await
        .expect("list failed");
    assert_eq!(as_dam.len(), 1);

    // The sire appears in both records, newest first.
    let as_sire = repo
        .get_breeding_records_by_animal(sire)
        .await
        .expect("list failed");
    assert_eq!(as_sire.len(), 2);
    assert_eq!(as_sire[0].breeding_date, date("2024-03-01"));
}

#[tokio::test]
async fn update_health_record_of_missing_id_returns_not_found() {
    let repo = test_repo().await;
    let patch = core_types::HealthRecordPatch {
        diagnosis: Some("Updated".to_string()),
        ..core_types::HealthRecordPatch::default()
    };
    let result = repo.update_health_record(777, &patch).await;
    assert!(matches!(result, Err(DbError::NotFound)));
}

#[tokio::test]
async fn health_record_supports_full_field_update() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");
    let record_id = repo
        .add_health_record(&health_record(id, "2024-01-10"))
        .await
        .expect("insert failed");

    let patch = core_types::HealthRecordPatch {
        diagnosis: Some("Mild mastitis".to_string()),
        treatment: Some("Antibiotics for 5 days".to_string()),
        cost: Some(75.0),
        ..core_types::HealthRecordPatch::default()
    };
    repo.update_health_record(record_id, &patch)
        .await
        .expect("update failed");

    let records = repo
        .get_health_records_by_animal(id)
        .await
        .expect("list failed");
    assert_eq!(records[0].diagnosis.as_deref(), Some("Mild mastitis"));
    assert_eq!(records[0].cost, Some(75.0));
    // Original fields not in the patch survive.
    assert_eq!(records[0].record_type, "Checkup");
}

#[tokio::test]
async fn vaccinations_round_trip_and_list_newest_first() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");

    for (day, vaccine) in [("2023-01-15", "FMD"), ("2024-01-15", "FMD Booster")] {
        repo.add_vaccination(&NewVaccination {
            animal_id: id,
            vaccine_name: vaccine.to_string(),
            vaccination_date: date(day),
            batch_number: Some("FMD-2024-A123".to_string()),
            next_due_date: Some(date("2025-01-15")),
            veterinarian: Some("Dr. Sarah Johnson".to_string()),
            cost: Some(25.0),
            notes: None,
        })
        .await
        .expect("insert failed");
    }

    let records = repo
        .get_vaccinations_by_animal(id)
        .await
        .expect("list failed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].vaccine_name, "FMD Booster");
    assert_eq!(records[0].vaccination_date, date("2024-01-15"));
    assert_eq!(records[0].batch_number.as_deref(), Some("FMD-2024-A123"));
    assert_eq!(records[0].next_due_date, Some(date("2025-01-15")));
    assert_eq!(records[1].vaccine_name, "FMD");
}

#[tokio::test]
async fn offspring_round_trip_by_breeding_record() {
    let repo = test_repo().await;
    let dam = repo.add_animal(&animal("C001")).await.expect("insert failed");
    let breeding_id = repo
        .add_breeding_record(&NewBreedingRecord {
            dam_id: dam,
            breeding_date: date("2024-02-14"),
            ..NewBreedingRecord::default()
        })
        .await
        .expect("insert failed");

    repo.add_offspring(&NewOffspring {
        breeding_record_id: breeding_id,
        animal_id: None,
        birth_weight: Some(32.5),
        birth_status: Some("Alive".to_string()),
    })
    .await
    .expect("insert failed");

    let offspring = repo
        .get_offspring_by_breeding_record(breeding_id)
        .await
        .expect("list failed");
    assert_eq!(offspring.len(), 1);
    assert_eq!(offspring[0].breeding_record_id, breeding_id);
    assert_eq!(offspring[0].birth_weight, Some(32.5));
    assert_eq!(offspring[0].birth_status.as_deref(), Some("Alive"));
}

#[tokio::test]
async fn milk_production_round_trips_and_lists_newest_first() {
    let repo = test_repo().await;
    let id = repo.add_animal(&animal("C001")).await.expect("insert failed");

    for day in ["2024-03-01", "2024-03-03", "2024-03-02"] {
        repo.add_milk_production(&NewMilkProduction {
            animal_id: id,
            production_date: date(day),
            morning_yield: Some(12.5),
            evening_yield: Some(11.0),
            total_yield: Some(23.5),
            quality_grade: Some("A".to_string()),
            ..NewMilkProduction::default()
        })
        .await
        .expect("insert failed");
    }

    let records = repo
        .get_milk_production_by_animal(id)
        .await
        .expect("list failed");
    let dates: Vec<String> = records.iter().map(|r| r.production_date.to_string()).collect();
    assert_eq!(dates, vec!["2024-03-03", "2024-03-02", "2024-03-01"]);
    // Stored exactly as supplied, including the caller-computed total.
    assert_eq!(records[0].total_yield, Some(23.5));
    assert_eq!(records[0].quality_grade.as_deref(), Some("A"));
}

#[tokio::test]
async fn egg_production_filters_by_flock_and_lists_newest_first() {
    let repo = test_repo().await;
    let flock = repo.add_animal(&animal("F001")).await.expect("insert failed");
    let other = repo.add_animal(&animal("F002")).await.expect("insert failed");

    for (day, flock_id, collected) in [
        ("2024-04-01", Some(flock), 40),
        ("2024-04-03", Some(flock), 42),
        ("2024-04-02", Some(other), 7),
    ] {
        repo.add_egg_production(&NewEggProduction {
            production_date: date(day),
            flock_id,
            eggs_collected: Some(collected),
            eggs_broken: Some(2),
            eggs_sold: Some(36),
            price_per_egg: Some(0.25),
            notes: None,
        })
        .await
        .expect("insert failed");
    }

    // The filter's animal id constrains the flock column.
    let filter = RecordFilter {
        animal_id: Some(flock),
        ..RecordFilter::default()
    };
    let records = repo.get_egg_production(&filter).await.expect("list failed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].production_date, date("2024-04-03"));
    assert_eq!(records[0].eggs_collected, Some(42));
    assert_eq!(records[1].production_date, date("2024-04-01"));
}

#[tokio::test]
async fn egg_production_filters_by_inclusive_date_range() {
    let repo = test_repo().await;
    for day in ["2024-04-01", "2024-04-05", "2024-04-10"] {
        repo.add_egg_production(&NewEggProduction {
            production_date: date(day),
            eggs_collected: Some(40),
            ..NewEggProduction::default()
        })
        .await
        .expect("insert failed");
    }

    let filter = RecordFilter {
        start_date: Some(date("2024-04-05")),
        end_date: Some(date("2024-04-10")),
        ..RecordFilter::default()
    };
    let records = repo.get_egg_production(&filter).await.expect("list failed");
    let dates: Vec<String> = records.iter().map(|r| r.production_date.to_string()).collect();
    assert_eq!(dates, vec!["2024-04-10", "2024-04-05"]);
}
