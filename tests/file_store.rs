use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::tempdir;
use vpet::{JsonFileStore, ManualClock, PetRecord, PetStore, StoreError, VirtualPet};

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_micro_opt(9, 15, 30, 123_456)
        .unwrap()
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("pet.json"));

    let mut record = PetRecord::new("Rex", start());
    record.hunger = 3.0;
    record.happiness = 7.5;
    record.health = 9.5;
    record.age = 12;
    record.last_played = start() + Duration::minutes(90);

    store.save(&record).unwrap();
    assert_eq!(store.load().unwrap(), Some(record));
}

#[test]
fn missing_file_loads_as_absent() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nope.json"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn corrupt_file_is_treated_as_no_pet_and_replaced_on_create() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let clock = ManualClock::new(start());
    let pet = VirtualPet::open(JsonFileStore::new(&path), &clock, Some("Rex".into())).unwrap();
    assert_eq!(pet.record().unwrap().name, "Rex");

    let reloaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(reloaded, PetRecord::new("Rex", start()));
}

#[test]
fn partial_or_nameless_records_are_absent() {
    let dir = tempdir().unwrap();

    let partial = dir.path().join("partial.json");
    std::fs::write(&partial, r#"{ "name": "Rex", "hunger": 1, "happiness": 2 }"#).unwrap();
    assert_eq!(JsonFileStore::new(&partial).load().unwrap(), None);

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "{}").unwrap();
    assert_eq!(JsonFileStore::new(&empty).load().unwrap(), None);

    let nameless = dir.path().join("nameless.json");
    std::fs::write(
        &nameless,
        r#"{
            "name": "",
            "hunger": 0, "happiness": 10, "health": 10, "age": 0,
            "last_fed": "2024-05-01T09:00:00",
            "last_played": "2024-05-01T09:00:00",
            "last_slept": "2024-05-01T09:00:00"
        }"#,
    )
    .unwrap();
    assert_eq!(JsonFileStore::new(&nameless).load().unwrap(), None);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("pet.json");

    let clock = ManualClock::new(start());
    VirtualPet::open(JsonFileStore::new(&path), &clock, Some("Rex".into())).unwrap();

    assert!(path.exists());
}

#[test]
fn session_actions_are_visible_to_the_next_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.json");
    let clock = ManualClock::new(start());

    {
        let mut pet = VirtualPet::open(JsonFileStore::new(&path), &clock, Some("Rex".into())).unwrap();
        clock.advance(Duration::hours(8));
        pet.sleep().unwrap();
        pet.age_pet().unwrap();
    }

    let pet = VirtualPet::open(JsonFileStore::new(&path), &clock, None).unwrap();
    let record = pet.record().unwrap();
    assert_eq!(record.hunger, 2.0);
    assert_eq!(record.health, 9.5);
    assert_eq!(record.age, 1);
    assert_eq!(record.last_slept, start() + Duration::hours(8));
}

#[test]
fn unwritable_location_surfaces_an_error() {
    let dir = tempdir().unwrap();
    // a regular file where a directory is expected
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut store = JsonFileStore::new(blocker.join("pet.json"));
    let result = store.save(&PetRecord::new("Rex", start()));
    assert!(matches!(result, Err(StoreError::Io { .. })));
}
