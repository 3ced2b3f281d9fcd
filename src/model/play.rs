use crate::registry::{FieldAnnotations, FieldDescriptor, ModelClass};
use crate::vocabulary::{
    ClassAnnotation, ClassId, CommentAnnotation, ObjectPropertyMarker, PropertyAnnotation,
    SubClassOfAnnotation,
};

pub static SHOT: ModelClass = ModelClass::new("Shot", &SHOT_FIELDS);
pub static REBOUND: ModelClass = ModelClass::new("Rebound", &REBOUND_FIELDS);
pub static FOUL: ModelClass = ModelClass::new("Foul", &FOUL_FIELDS);
pub static TURNOVER: ModelClass = ModelClass::new("Turnover", &TURNOVER_FIELDS);
pub static TIMEOUT: ModelClass = ModelClass::new("Timeout", &TIMEOUT_FIELDS);
pub static ENTERS: ModelClass = ModelClass::new("Enters", &ENTERS_FIELDS);

const PLAY_AND_EVENT: &[ClassId] = &[ClassId::new("Play"), ClassId::new("Event")];
const REBOUND_AND_FOUL: &[ClassId] = &[ClassId::new("Rebound"), ClassId::new("Foul")];

const fn play_class(class: &'static str, comment: Option<CommentAnnotation>) -> FieldAnnotations {
    FieldAnnotations {
        class: Some(ClassAnnotation::new(class)),
        sub_class_of: Some(SubClassOfAnnotation::new(PLAY_AND_EVENT)),
        property: None,
        object_property: None,
        comment,
    }
}

const fn player_link(label: &'static str, domain: &'static str) -> FieldAnnotations {
    FieldAnnotations {
        class: Some(ClassAnnotation::new("Player")),
        sub_class_of: None,
        property: Some(PropertyAnnotation::new(label, domain, &[], "Player")),
        object_property: Some(ObjectPropertyMarker {}),
        comment: None,
    }
}

const fn literal(
    label: &'static str,
    domain: &'static str,
    range: &'static str,
) -> FieldAnnotations {
    FieldAnnotations {
        class: None,
        sub_class_of: None,
        property: Some(PropertyAnnotation::new(label, domain, &[], range)),
        object_property: None,
        comment: None,
    }
}

static SHOT_FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor::new("shot", play_class("Shot", None)),
    FieldDescriptor::new("shot_by", player_link("shot by", "Shot")),
    FieldDescriptor::new("shot_assisted_by", player_link("shot assisted by", "Shot")),
    FieldDescriptor::new("shot_blocked_by", player_link("shot blocked by", "Shot")),
    FieldDescriptor::new("shot_type", literal("shot type", "Shot", "xsd:string")),
    FieldDescriptor::new("shot_made", literal("shot made", "Shot", "xsd:boolean")),
    FieldDescriptor::new(
        "shot_points",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new("shot points", "Shot", &[], "xsd:int")),
            object_property: None,
            comment: Some(CommentAnnotation::new("Points scored; 0 for a miss")),
        },
    ),
];

static REBOUND_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::new("rebound", play_class("Rebound", None)),
    FieldDescriptor::new("rebounded_by", player_link("rebounded by", "Rebound")),
    FieldDescriptor::new(
        "is_offensive",
        FieldAnnotations {
            class: None,
            sub_class_of: None,
            property: Some(PropertyAnnotation::new(
                "is offensive",
                "",
                REBOUND_AND_FOUL,
                "xsd:boolean",
            )),
            object_property: None,
            comment: Some(CommentAnnotation::new(
                "Offensive rebound, or a foul committed by the team in possession",
            )),
        },
    ),
];

static FOUL_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::new("foul", play_class("Foul", None)),
    FieldDescriptor::new("foul_committed_by", player_link("foul committed by", "Foul")),
    FieldDescriptor::new("foul_drawn_by", player_link("foul drawn by", "Foul")),
    FieldDescriptor::new(
        "is_shooting_foul",
        literal("is shooting foul", "Foul", "xsd:boolean"),
    ),
    FieldDescriptor::new("is_charge", literal("is charge", "Foul", "xsd:boolean")),
];

static TURNOVER_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::new("turnover", play_class("Turnover", None)),
    FieldDescriptor::new("turnover_type", literal("turnover type", "Turnover", "xsd:string")),
    FieldDescriptor::new("stolen_by", player_link("stolen by", "Turnover")),
    FieldDescriptor::new(
        "committed_by",
        player_link("turnover committed by", "Turnover"),
    ),
];

static TIMEOUT_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new(
        "timeout",
        play_class(
            "Timeout",
            Some(CommentAnnotation::new("Full, 20-second or official timeout")),
        ),
    ),
    FieldDescriptor::new(
        "timeout_duration",
        literal("timeout duration", "Timeout", "xsd:string"),
    ),
];

static ENTERS_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::new(
        "enters",
        play_class("Enters", Some(CommentAnnotation::new("A substitution"))),
    ),
    FieldDescriptor::new("player_entering", player_link("player entering", "Enters")),
    FieldDescriptor::new("player_exiting", player_link("player exiting", "Enters")),
];
