//! Static tajweed reference data served to the reader screen.
//!
//! Pure data, no IO. Summaries are deliberately short; this is a quick
//! reference, not a textbook.

use serde::Serialize;

/// A single tajweed rule with a one-paragraph summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TajweedRule {
    /// Rule name.
    pub title: &'static str,
    /// Short explanation of when and how the rule applies.
    pub summary: &'static str,
}

/// A named group of related rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TajweedSection {
    /// Section heading.
    pub name: &'static str,
    /// Rules in the section.
    pub rules: &'static [TajweedRule],
}

const MAKHARIJ: &[TajweedRule] = &[
    TajweedRule {
        title: "Articulation points",
        summary: "Every letter has a fixed articulation point (makhraj) in \
                  the mouth, throat, or lips; correct recitation begins with \
                  producing each letter from its own point.",
    },
    TajweedRule {
        title: "Heavy and light letters",
        summary: "The seven heavy (mufakhkham) letters are pronounced with a \
                  full mouth; all others are light. The letter ra is heavy \
                  with fatha or damma and light with kasra.",
    },
    TajweedRule {
        title: "Elongation (madd)",
        summary: "A vowelled letter followed by a madd letter is stretched to \
                  two counts; a madd sign extends it to four or five before a \
                  hamza and six before a shadda.",
    },
];

const SILENT_NUN: &[TajweedRule] = &[
    TajweedRule {
        title: "Izhar",
        summary: "Before the six throat letters the silent nun is pronounced \
                  clearly, with no change.",
    },
    TajweedRule {
        title: "Iqlab",
        summary: "Before the letter ba the silent nun converts to a mim \
                  sound, held with nasalization (ghunna) for two counts.",
    },
    TajweedRule {
        title: "Idgham",
        summary: "Before the letters of yarmaloon the nun assimilates into \
                  the following letter; with four of them the merge carries \
                  ghunna. Idgham applies only across word boundaries.",
    },
    TajweedRule {
        title: "Ikhfa",
        summary: "Before the remaining letters the nun is concealed: the \
                  tongue does not touch the palate fully and the sound \
                  carries ghunna.",
    },
];

const SILENT_MIM: &[TajweedRule] = &[
    TajweedRule {
        title: "Labial idgham",
        summary: "A silent mim followed by another mim merges into it with \
                  ghunna, shown by a shadda.",
    },
    TajweedRule {
        title: "Labial ikhfa",
        summary: "Followed by ba, the lips do not close completely and the \
                  mim carries ghunna.",
    },
    TajweedRule {
        title: "Izhar",
        summary: "Before any other letter the mim is pronounced plainly.",
    },
];

const QALQALAH: &[TajweedRule] = &[TajweedRule {
    title: "Qalqalah",
    summary: "The five qalqalah letters rebound with an echoing sound when \
              bearing sukun: lightly in the middle of a word, more strongly \
              at a stop, and strongest when doubled at a stop.",
}];

const WAQF: &[TajweedRule] = &[TajweedRule {
    title: "Stopping",
    summary: "When stopping on a word the final vowel is dropped; stop signs \
              in the mushaf mark where a pause is required, preferred, \
              permitted, or forbidden.",
}];

const USLUB: &[TajweedRule] = &[
    TajweedRule {
        title: "State of the heart",
        summary: "The reciter approaches humbly, reflects on the meaning of \
                  the verses, keeps distracting thoughts away, and takes each \
                  message as addressed to themselves.",
    },
    TajweedRule {
        title: "State of the body",
        summary: "The reciter attends to the cleanliness of body, clothing, \
                  and place, preferably faces the qibla, pauses at verses of \
                  warning to seek refuge and at verses of mercy to ask for \
                  it, and recites with ablution.",
    },
];

const SECTIONS: &[TajweedSection] = &[
    TajweedSection {
        name: "Articulation",
        rules: MAKHARIJ,
    },
    TajweedSection {
        name: "Silent nun",
        rules: SILENT_NUN,
    },
    TajweedSection {
        name: "Silent mim",
        rules: SILENT_MIM,
    },
    TajweedSection {
        name: "Qalqalah",
        rules: QALQALAH,
    },
    TajweedSection {
        name: "Stopping",
        rules: WAQF,
    },
    TajweedSection {
        name: "Style",
        rules: USLUB,
    },
];

/// The full tajweed reference, in display order.
#[must_use]
pub fn reference() -> &'static [TajweedSection] {
    SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_all_sections_in_display_order() {
        let names: Vec<&str> = reference().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "Articulation",
                "Silent nun",
                "Silent mim",
                "Qalqalah",
                "Stopping",
                "Style"
            ]
        );
    }

    #[test]
    fn should_cover_recitation_etiquette_in_the_style_section() {
        let section = reference()
            .iter()
            .find(|s| s.name == "Style")
            .expect("style section");
        let titles: Vec<&str> = section.rules.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["State of the heart", "State of the body"]);
    }

    #[test]
    fn should_have_rules_in_every_section() {
        assert!(reference().iter().all(|s| !s.rules.is_empty()));
    }

    #[test]
    fn should_cover_the_four_silent_nun_cases() {
        let section = &reference()[1];
        let titles: Vec<&str> = section.rules.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Izhar", "Iqlab", "Idgham", "Ikhfa"]);
    }
}
