use crate::registry::{FieldAnnotations, FieldDescriptor, ModelClass};
use crate::vocabulary::{
    ClassAnnotation, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
};

pub static GAME: ModelClass = ModelClass::new("Game", &GAME_FIELDS);
pub static TEAM: ModelClass = ModelClass::new("Team", &TEAM_FIELDS);
pub static ROSTER: ModelClass = ModelClass::new("Roster", &ROSTER_FIELDS);
pub static PLAYER: ModelClass = ModelClass::new("Player", &PLAYER_FIELDS);

static GAME_FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor::new(
        "game",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Game")),
            sub_class_of: None,
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new("A basketball game")),
        },
    ),
    // Carries the object-property marker; a field table may declare homeTeam without it.
    FieldDescriptor::new(
        "home_team",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Team")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("home team", "Game", &[], "Team")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "away_team",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Team")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("away team", "Game", &[], "Team")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "game_time",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "game time",
                "Game",
                &[],
                "xsd:dateTime",
            )),
            object_property: None,
            comment: Some(CommentAnnotation::new("Scheduled tip-off time of the game")),
        },
    ),
    FieldDescriptor::new(
        "game_location",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "game location",
                "Game",
                &[],
                "xsd:string",
            )),
            object_property: None,
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "home_team_roster",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Roster")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "has home team roster",
                "Game",
                &[],
                "Roster",
            )),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "away_team_roster",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Roster")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "has away team roster",
                "Game",
                &[],
                "Roster",
            )),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
];

static TEAM_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new(
        "team",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Team")),
            sub_class_of: None,
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new("A basketball team")),
        },
    ),
    FieldDescriptor::new(
        "team_name",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("team name", "Team", &[], "xsd:string")),
            object_property: None,
            comment: None,
        },
    ),
];

static ROSTER_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::new(
        "roster",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Roster")),
            sub_class_of: None,
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new(
                "The players who suited up for one team in one game",
            )),
        },
    ),
    FieldDescriptor::new(
        "roster_for_team",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Team")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("roster for team", "Roster", &[], "Team")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "has_player",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Player")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("has player", "Roster", &[], "Player")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
];

static PLAYER_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new(
        "player",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Player")),
            sub_class_of: None,
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new("A basketball player")),
        },
    ),
    FieldDescriptor::new(
        "player_name",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "player name",
                "Player",
                &[],
                "xsd:string",
            )),
            object_property: None,
            comment: None,
        },
    ),
];
