//! Kinship vocabularies: render a [`Kinship`] as a display term.
//!
//! A vocabulary is a total table over `Kinship`. Swapping languages means
//! swapping the table; the finder and classifier stay untouched.

use crate::model::{Gender, Kinship, Seniority, Side};

/// A fixed term table.
pub trait Vocabulary: Send + Sync {
    fn term(&self, kinship: &Kinship) -> &'static str;
}

/// Nepali kinship terms (Devanagari).
///
/// Where birth order is unknown, elder/younger pairs collapse to the
/// gender-only form (दाजुभाइ, दिदीबहिनी). Pairs with no gender-only word fall
/// back to the younger-branch term (काका, देवर, भाइबुहारी). Every defined
/// kinship has a term under every seniority.
#[derive(Debug, Clone, Copy, Default)]
pub struct NepaliVocabulary;

impl NepaliVocabulary {
    pub const SELF: &'static str = "स्वयं";
    pub const DISTANT: &'static str = "टाढाको नाता";
    pub const NOT_RELATED: &'static str = "नाता भेटिएन";
}

impl Vocabulary for NepaliVocabulary {
    fn term(&self, kinship: &Kinship) -> &'static str {
        use Gender::{Female as F, Male as M};
        use Kinship::*;
        use Seniority::{Elder, Unknown, Younger};
        use Side::{Maternal, Paternal};

        match *kinship {
            Myself => Self::SELF,
            Spouse(M) => "श्रीमान",
            Spouse(F) => "श्रीमती",
            Parent(M) => "बुबा",
            Parent(F) => "आमा",
            Child(M) => "छोरा",
            Child(F) => "छोरी",

            Sibling { gender: M, seniority: Elder } => "दाजु",
            Sibling { gender: M, seniority: Younger } => "भाइ",
            Sibling { gender: M, seniority: Unknown } => "दाजुभाइ",
            Sibling { gender: F, seniority: Elder } => "दिदी",
            Sibling { gender: F, seniority: Younger } => "बहिनी",
            Sibling { gender: F, seniority: Unknown } => "दिदीबहिनी",

            Grandparent { gender: M, side: Paternal } => "बाजे",
            Grandparent { gender: F, side: Paternal } => "बज्यै",
            Grandparent { gender: M, side: Maternal } => "मावली बाजे",
            Grandparent { gender: F, side: Maternal } => "मावली बज्यै",
            Grandchild(M) => "नाति",
            Grandchild(F) => "नातिनी",
            GreatGrandparent(M) => "जिजुबाजे",
            GreatGrandparent(F) => "जिजुबज्यै",
            GreatGrandchild(M) => "पनाति",
            GreatGrandchild(F) => "पनातिनी",

            ParentSibling { gender: M, side: Paternal, seniority: Elder } => "ठूलोबुबा",
            ParentSibling { gender: M, side: Paternal, seniority: Younger | Unknown } => "काका",
            ParentSibling { gender: F, side: Paternal, .. } => "फुपू",
            ParentSibling { gender: M, side: Maternal, .. } => "मामा",
            ParentSibling { gender: F, side: Maternal, seniority: Elder } => "ठूलीआमा",
            ParentSibling { gender: F, side: Maternal, seniority: Younger | Unknown } => "सानिमा",

            ParentSiblingSpouse { gender: F, side: Paternal, seniority: Elder } => "ठूलीआमा",
            ParentSiblingSpouse { gender: F, side: Paternal, seniority: Younger | Unknown } => "काकी",
            ParentSiblingSpouse { gender: M, side: Paternal, .. } => "फुपाजु",
            ParentSiblingSpouse { gender: F, side: Maternal, .. } => "माइजु",
            ParentSiblingSpouse { gender: M, side: Maternal, seniority: Elder } => "ठूलोबुबा",
            ParentSiblingSpouse { gender: M, side: Maternal, seniority: Younger | Unknown } => "सानोबुबा",

            SiblingChild { gender: M, side: Paternal } => "भतिजा",
            SiblingChild { gender: F, side: Paternal } => "भतिजी",
            SiblingChild { gender: M, side: Maternal } => "भान्जा",
            SiblingChild { gender: F, side: Maternal } => "भान्जी",

            // Cousins are addressed with sibling terms.
            Cousin { gender, seniority } => self.term(&Sibling { gender, seniority }),

            SiblingSpouse { gender: F, seniority: Elder } => "भाउजु",
            SiblingSpouse { gender: F, seniority: Younger | Unknown } => "भाइबुहारी",
            SiblingSpouse { gender: M, seniority: Elder } => "भिनाजु",
            SiblingSpouse { gender: M, seniority: Younger | Unknown } => "ज्वाइँ",

            ChildSpouse(M) => "ज्वाइँ",
            ChildSpouse(F) => "बुहारी",
            GrandchildSpouse(M) => "नातिनीज्वाइँ",
            GrandchildSpouse(F) => "नातिबुहारी",
            SpouseParent(M) => "ससुरा",
            SpouseParent(F) => "सासू",

            // Husband's siblings
            SpouseSibling { gender: M, spouse: M, seniority: Elder } => "जेठाजु",
            SpouseSibling { gender: M, spouse: M, seniority: Younger | Unknown } => "देवर",
            SpouseSibling { gender: F, spouse: M, seniority: Elder } => "आमाजु",
            SpouseSibling { gender: F, spouse: M, seniority: Younger | Unknown } => "नन्द",
            // Wife's siblings
            SpouseSibling { gender: M, spouse: F, seniority: Elder } => "जेठान",
            SpouseSibling { gender: M, spouse: F, seniority: Younger | Unknown } => "सालो",
            SpouseSibling { gender: F, spouse: F, seniority: Elder } => "जेठीसासू",
            SpouseSibling { gender: F, spouse: F, seniority: Younger | Unknown } => "साली",

            // Husband's siblings' spouses
            SpouseSiblingSpouse { gender: F, spouse: M, seniority: Elder } => "जेठानी",
            SpouseSiblingSpouse { gender: F, spouse: M, seniority: Younger | Unknown } => "देउरानी",
            SpouseSiblingSpouse { gender: M, spouse: M, .. } => "नन्देज्वाइँ",
            // Wife's siblings' spouses
            SpouseSiblingSpouse { gender: M, spouse: F, .. } => "साढु",
            SpouseSiblingSpouse { gender: F, spouse: F, seniority: Elder } => "जेठानकी श्रीमती",
            SpouseSiblingSpouse { gender: F, spouse: F, seniority: Younger | Unknown } => "सालाकी श्रीमती",

            CoParentInLaw(M) => "सम्धी",
            CoParentInLaw(F) => "सम्धिनी",

            Other => Self::DISTANT,
            NotRelated => Self::NOT_RELATED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: NepaliVocabulary = NepaliVocabulary;

    #[test]
    fn test_gendered_pairs() {
        assert_eq!(V.term(&Kinship::Parent(Gender::Male)), "बुबा");
        assert_eq!(V.term(&Kinship::Parent(Gender::Female)), "आमा");
        assert_eq!(V.term(&Kinship::Spouse(Gender::Male)), "श्रीमान");
        assert_eq!(V.term(&Kinship::Spouse(Gender::Female)), "श्रीमती");
    }

    #[test]
    fn test_seniority_collapses_when_unknown() {
        let brother = |seniority| Kinship::Sibling { gender: Gender::Male, seniority };
        assert_eq!(V.term(&brother(Seniority::Elder)), "दाजु");
        assert_eq!(V.term(&brother(Seniority::Younger)), "भाइ");
        assert_eq!(V.term(&brother(Seniority::Unknown)), "दाजुभाइ");
    }

    #[test]
    fn test_uncle_terms_by_side() {
        let uncle = |side, seniority| Kinship::ParentSibling { gender: Gender::Male, side, seniority };
        assert_eq!(V.term(&uncle(Side::Paternal, Seniority::Elder)), "ठूलोबुबा");
        assert_eq!(V.term(&uncle(Side::Paternal, Seniority::Younger)), "काका");
        assert_eq!(V.term(&uncle(Side::Maternal, Seniority::Unknown)), "मामा");
    }

    #[test]
    fn test_spouse_sibling_depends_on_spouse_gender() {
        let k = |spouse| Kinship::SpouseSibling { gender: Gender::Male, spouse, seniority: Seniority::Younger };
        assert_eq!(V.term(&k(Gender::Male)), "देवर");
        assert_eq!(V.term(&k(Gender::Female)), "सालो");
    }

    #[test]
    fn test_unknown_seniority_falls_back_to_younger_term() {
        let sib_spouse = |seniority| Kinship::SiblingSpouse { gender: Gender::Female, seniority };
        assert_eq!(V.term(&sib_spouse(Seniority::Elder)), "भाउजु");
        assert_eq!(V.term(&sib_spouse(Seniority::Unknown)), "भाइबुहारी");
        let sis_in_law = |seniority| Kinship::SpouseSiblingSpouse {
            gender: Gender::Female,
            spouse: Gender::Male,
            seniority,
        };
        assert_eq!(V.term(&sis_in_law(Seniority::Elder)), "जेठानी");
        assert_eq!(V.term(&sis_in_law(Seniority::Unknown)), "देउरानी");
    }

    #[test]
    fn test_every_defined_kinship_has_a_term() {
        use Kinship::*;
        let genders = [Gender::Male, Gender::Female];
        let sides = [Side::Paternal, Side::Maternal];
        let seniorities = [Seniority::Elder, Seniority::Younger, Seniority::Unknown];

        let mut all = Vec::new();
        for gender in genders {
            all.extend([
                Spouse(gender),
                Parent(gender),
                Child(gender),
                Grandchild(gender),
                GreatGrandparent(gender),
                GreatGrandchild(gender),
                ChildSpouse(gender),
                GrandchildSpouse(gender),
                SpouseParent(gender),
                CoParentInLaw(gender),
            ]);
            for side in sides {
                all.extend([Grandparent { gender, side }, SiblingChild { gender, side }]);
            }
            for seniority in seniorities {
                all.extend([
                    Sibling { gender, seniority },
                    Cousin { gender, seniority },
                    SiblingSpouse { gender, seniority },
                ]);
                for side in sides {
                    all.extend([
                        ParentSibling { gender, side, seniority },
                        ParentSiblingSpouse { gender, side, seniority },
                    ]);
                }
                for spouse in genders {
                    all.extend([
                        SpouseSibling { gender, spouse, seniority },
                        SpouseSiblingSpouse { gender, spouse, seniority },
                    ]);
                }
            }
        }

        for kinship in all {
            assert!(kinship.is_defined());
            let term = V.term(&kinship);
            assert_ne!(term, NepaliVocabulary::DISTANT, "{kinship:?}");
            assert_ne!(term, NepaliVocabulary::NOT_RELATED, "{kinship:?}");
            assert!(!term.is_empty());
        }
    }

    #[test]
    fn test_sentinels_differ() {
        assert_ne!(V.term(&Kinship::Other), V.term(&Kinship::NotRelated));
        assert_eq!(V.term(&Kinship::Myself), NepaliVocabulary::SELF);
    }
}
