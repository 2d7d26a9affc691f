use super::*;

const VALID_YAML: &str = r"
- name: Chess Club
  description: Learn strategies and compete in chess tournaments
  schedule: Fridays, 3:30 PM - 5:00 PM
  max_participants: 12
  participants: [michael@mergington.edu, daniel@mergington.edu]
- name: Debate Team
  description: Argue both sides
  schedule: Mondays, 4:00 PM - 5:00 PM
  max_participants: 8
";

#[test]
fn builtin_catalogue_has_nine_activities_in_order() {
    let directory = default_directory();
    let names: Vec<&str> = directory.names().collect();
    assert_eq!(
        names,
        vec![
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Basketball Team",
            "Tennis Club",
            "Drama Club",
            "Art Studio",
            "Robotics Club",
            "Science olympiad",
        ]
    );
}

#[test]
fn builtin_catalogue_passes_validation() {
    assert!(validate(&builtin_catalogue()).is_ok());
}

#[test]
fn builtin_chess_club_matches_known_roster() {
    let directory = default_directory();
    let chess = directory.get("Chess Club").unwrap();
    assert_eq!(chess.max_participants, 12);
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess.participants, vec![
        ParticipantId::new("michael@mergington.edu"),
        ParticipantId::new("daniel@mergington.edu"),
    ]);
}

#[test]
fn yaml_catalogue_loads_with_default_empty_roster() {
    let directory = directory_from_yaml(VALID_YAML).unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory.get("Chess Club").unwrap().participants.len(), 2);
    let debate = directory.get("Debate Team").unwrap();
    assert_eq!(debate.max_participants, 8);
    assert!(debate.participants.is_empty());
}

#[test]
fn yaml_catalogue_rejects_malformed_yaml() {
    let err = directory_from_yaml("- name: [unterminated").unwrap_err();
    assert!(matches!(err, SeedError::Parse(_)));
}

#[test]
fn yaml_catalogue_rejects_missing_required_field() {
    let err = directory_from_yaml("- name: Chess Club\n  description: x\n  max_participants: 3\n").unwrap_err();
    assert!(matches!(err, SeedError::Parse(_)));
}

#[test]
fn validate_rejects_empty_catalogue() {
    assert!(matches!(validate(&[]), Err(SeedError::Empty)));
}

#[test]
fn validate_rejects_duplicate_activity_names() {
    let mut entries = builtin_catalogue();
    entries.push(entries[0].clone());
    match validate(&entries) {
        Err(SeedError::DuplicateActivity(name)) => assert_eq!(name, "Chess Club"),
        other => panic!("expected duplicate activity error, got {other:?}"),
    }
}

#[test]
fn validate_treats_names_case_sensitively() {
    let mut entries = builtin_catalogue();
    let mut lower = entries[0].clone();
    lower.name = "chess club".into();
    entries.push(lower);
    assert!(validate(&entries).is_ok());
}

#[test]
fn validate_rejects_blank_description_and_schedule() {
    let mut entries = builtin_catalogue();
    entries[1].description = "   ".into();
    assert!(matches!(
        validate(&entries),
        Err(SeedError::EmptyField { field: "description", .. })
    ));

    let mut entries = builtin_catalogue();
    entries[2].schedule = String::new();
    assert!(matches!(validate(&entries), Err(SeedError::EmptyField { field: "schedule", .. })));
}

#[test]
fn validate_rejects_zero_capacity() {
    let mut entries = builtin_catalogue();
    entries[3].max_participants = 0;
    assert!(matches!(validate(&entries), Err(SeedError::ZeroCapacity(name)) if name == "Basketball Team"));
}

#[test]
fn validate_allows_roster_over_capacity() {
    let mut entries = builtin_catalogue();
    entries[3].max_participants = 1;
    entries[3].participants = vec!["a@x".into(), "b@x".into()];
    assert!(validate(&entries).is_ok());
}

#[test]
fn validate_rejects_duplicate_participants() {
    let mut entries = builtin_catalogue();
    entries[0].participants.push("michael@mergington.edu".into());
    match validate(&entries) {
        Err(SeedError::DuplicateParticipant { activity, participant }) => {
            assert_eq!(activity, "Chess Club");
            assert_eq!(participant, "michael@mergington.edu");
        }
        other => panic!("expected duplicate participant error, got {other:?}"),
    }
}

#[test]
fn load_directory_without_path_uses_builtin() {
    let directory = load_directory(None).unwrap();
    assert_eq!(directory.len(), 9);
}

#[test]
fn load_directory_reports_missing_file() {
    let path = std::path::Path::new("/nonexistent/clubsignup/seed.yaml");
    let err = load_directory(Some(path)).unwrap_err();
    assert!(matches!(err, SeedError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/clubsignup/seed.yaml"));
}
