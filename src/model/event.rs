use crate::registry::{FieldAnnotations, FieldDescriptor, ModelClass};
use crate::vocabulary::{
    ClassAnnotation, ClassId, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
    SubClassOfAnnotation,
};

pub static EVENT: ModelClass = ModelClass::new("Event", &EVENT_FIELDS);
pub static PLAY: ModelClass = ModelClass::new("Play", &PLAY_FIELDS);
pub static END_OF_PERIOD: ModelClass = ModelClass::new("EndOfPeriod", &END_OF_PERIOD_FIELDS);

const EVENT_ONLY: &[ClassId] = &[ClassId::new("Event")];

static EVENT_FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor::new(
        "event",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Event")),
            sub_class_of: None,
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new("An event in a play-by-play")),
        },
    ),
    FieldDescriptor::new(
        "in_game",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Game")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("in game", "Event", &[], "Game")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "event_number",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("event number", "Event", &[], "xsd:int")),
            object_property: None,
            comment: Some(CommentAnnotation::new(
                "Sequence number of the event within its game",
            )),
        },
    ),
    FieldDescriptor::new(
        "period",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("period", "Event", &[], "xsd:int")),
            object_property: None,
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "time",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("time", "Event", &[], "xsd:string")),
            object_property: None,
            comment: Some(CommentAnnotation::new(
                "Game clock reading as printed in the play-by-play",
            )),
        },
    ),
    FieldDescriptor::new(
        "seconds_into_game",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "seconds into game",
                "Event",
                &[],
                "xsd:int",
            )),
            object_property: None,
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "seconds_left_in_period",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "seconds left in period",
                "Event",
                &[],
                "xsd:int",
            )),
            object_property: None,
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "description",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "description",
                "Event",
                &[],
                "xsd:string",
            )),
            object_property: None,
            comment: None,
        },
    ),
    FieldDescriptor::new(
        "next_event",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Event")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("next event", "Event", &[], "Event")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
];

static PLAY_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::new(
        "play",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Play")),
            sub_class_of: Some(SubClassOfAnnotation::new(EVENT_ONLY)),
            property: None,
            object_property: None,
            comment: Some(CommentAnnotation::new("An event that one team made happen")),
        },
    ),
    FieldDescriptor::new(
        "for_team",
        FieldAnnotations {
            class: Some(ClassAnnotation::new("Team")),
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("for team", "Play", &[], "Team")),
            object_property: Some(ObjectPropertyMarker {}),
            comment: None,
        },
    ),
    // Parser bookkeeping only; not part of the ontology.
    FieldDescriptor::new("raw_player_text", FieldAnnotations::NONE),
];

static END_OF_PERIOD_FIELDS: [FieldDescriptor; 1] = [FieldDescriptor::new(
    "end_of_period",
    FieldAnnotations {
        class: Some(ClassAnnotation::new("EndOfPeriod")),
        sub_class_of: Some(SubClassOfAnnotation::new(EVENT_ONLY)),
        property: None,
        object_property: None,
        comment: None,
    },
)];
