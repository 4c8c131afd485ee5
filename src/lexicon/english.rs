//! English word lists

pub const TRANSITIONS: &[&str] = &[
    "accordingly",
    "additionally",
    "afterward",
    "also",
    "although",
    "as a result",
    "because",
    "besides",
    "consequently",
    "conversely",
    "finally",
    "first of all",
    "firstly",
    "for example",
    "for instance",
    "furthermore",
    "hence",
    "however",
    "in addition",
    "in conclusion",
    "in contrast",
    "in fact",
    "in other words",
    "in short",
    "indeed",
    "instead",
    "likewise",
    "meanwhile",
    "moreover",
    "nevertheless",
    "next",
    "nonetheless",
    "on the other hand",
    "otherwise",
    "secondly",
    "similarly",
    "specifically",
    "still",
    "subsequently",
    "therefore",
    "thus",
    "to summarize",
    "ultimately",
];

/// Forms of "to be" that open a passive construction
pub const PASSIVE_MARKERS: &[&str] = &["was", "were", "been", "being", "gets", "got"];

/// Words sharing a marker's spelling that are not auxiliaries
pub const PASSIVE_EXCEPTIONS: &[&str] = &[
    "wash",
    "washed",
    "washing",
    "washington",
    "wasp",
    "waste",
    "wasted",
    "wasteful",
    "werewolf",
    "gotcha",
    "gothic",
];
