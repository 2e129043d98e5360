// Lexicon — the static table of categories, match rules and severity weights.
//
// The table is compiled once into a `Lexicon` and shared read-only between
// every scoring call. Phrase rules are kept ahead of word rules so that
// multi-word expressions are scanned before the single words inside them.

use std::fmt;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// A named bucket of related offensive-language patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hate,
    Insults,
    Profanity,
    Threats,
    IdentityAttacks,
    Harassment,
    Obscene,
    OffensivePhrases,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Hate,
        Category::Insults,
        Category::Profanity,
        Category::Threats,
        Category::IdentityAttacks,
        Category::Harassment,
        Category::Obscene,
        Category::OffensivePhrases,
    ];

    /// Severity weight contributed by every match in this category.
    pub fn weight(self) -> f64 {
        match self {
            Category::Hate => 0.8,
            Category::Insults => 0.6,
            Category::Profanity => 0.5,
            Category::Threats => 0.9,
            Category::IdentityAttacks => 0.9,
            Category::Harassment => 0.7,
            Category::Obscene => 0.6,
            Category::OffensivePhrases => 0.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hate => "hate",
            Category::Insults => "insults",
            Category::Profanity => "profanity",
            Category::Threats => "threats",
            Category::IdentityAttacks => "identity_attacks",
            Category::Harassment => "harassment",
            Category::Obscene => "obscene",
            Category::OffensivePhrases => "offensive_phrases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule's alternatives are anchored in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Matches only on token boundaries, never inside a longer word.
    ///
    /// Boundaries are ASCII-only (`regex-lite`), so a non-ASCII letter right
    /// after a word ("killé") does not block the match.
    Word,
    /// Matches anywhere as a free substring.
    Phrase,
}

/// Uncompiled rule: a category, its anchoring, and a `|`-separated list of
/// alternatives (each alternative is a regex fragment).
pub type RuleSpec = (Category, RuleKind, &'static str);

/// The built-in English lexicon.
///
/// Some words deliberately appear under several categories (and twice under
/// profanity); each occurrence is a separate rule and contributes its own
/// weight when it matches.
pub const BUILTIN_RULES: &[RuleSpec] = &[
    (Category::Hate, RuleKind::Word, "hate|despise|detest"),
    (Category::Hate, RuleKind::Word, "racist|racism|bigot|bigotry"),
    (Category::Hate, RuleKind::Word, r"sexist|sexism|misogyn\w*|misandr\w*"),
    (Category::Hate, RuleKind::Word, r"homophob\w*|transphob\w*"),
    (Category::Hate, RuleKind::Word, r"xenophob\w*"),
    (Category::Insults, RuleKind::Word, "stupid|idiot|dumb|moron"),
    (Category::Insults, RuleKind::Word, "loser|pathetic|worthless|useless"),
    (Category::Insults, RuleKind::Word, "ugly|fat|disgusting"),
    (Category::Insults, RuleKind::Word, "shut up|stfu"),
    (Category::Insults, RuleKind::Word, "ass|asshole"),
    (Category::Insults, RuleKind::Word, "jerk|douche|dick"),
    (Category::Profanity, RuleKind::Word, "damn|hell|crap"),
    (Category::Profanity, RuleKind::Word, "shit|fuck|bitch"),
    (Category::Profanity, RuleKind::Word, "wtf|stfu|fu|fuck|shit|bitch"),
    (Category::Profanity, RuleKind::Word, "fucker|slut|fucked"),
    (Category::Profanity, RuleKind::Word, "chutiya|madarchod|mc|bc|loda"),
    (Category::Threats, RuleKind::Word, "kill|hurt|harm|punch|attack|beat"),
    (Category::Threats, RuleKind::Word, "die|death|dead|suicide"),
    (Category::Threats, RuleKind::Word, "threat|threaten"),
    (Category::Threats, RuleKind::Word, "destroy|ruin|end you"),
    (Category::Threats, RuleKind::Word, "chutiya|madarchod|mc|bc|loda"),
    (Category::IdentityAttacks, RuleKind::Word, "retard|retarded"),
    (Category::IdentityAttacks, RuleKind::Word, "nigga|fuck"),
    (Category::IdentityAttacks, RuleKind::Word, "chink|spic|kike|towelhead"),
    (Category::IdentityAttacks, RuleKind::Word, "whore|slut|cunt"),
    (Category::IdentityAttacks, RuleKind::Word, "chutiya|madarchod|mc|bc"),
    (Category::Harassment, RuleKind::Word, "stalk|harass|bully"),
    (Category::Harassment, RuleKind::Word, "creep|creepy"),
    (Category::Harassment, RuleKind::Word, "troll|trolling"),
    (Category::Harassment, RuleKind::Word, "chutiya|madarchod|mc|bc|loda"),
    (Category::Obscene, RuleKind::Word, "porn|pornography"),
    (Category::Obscene, RuleKind::Word, "sex|sexual"),
    (Category::Obscene, RuleKind::Word, "penis|vagina|dick"),
    (Category::OffensivePhrases, RuleKind::Phrase, "fuck off|fuck you|fuck it|fuck that"),
    (Category::OffensivePhrases, RuleKind::Phrase, "jerk off|jack off|get off|piss off"),
    (Category::OffensivePhrases, RuleKind::Phrase, "go to hell|go fuck yourself|go die"),
    (Category::OffensivePhrases, RuleKind::Phrase, "shut up|shut the fuck up|shut it"),
    (Category::OffensivePhrases, RuleKind::Phrase, "screw you|screw off|screw that"),
    (Category::OffensivePhrases, RuleKind::Phrase, "suck my|suck it|suck a"),
    (Category::OffensivePhrases, RuleKind::Phrase, "kiss my ass|my ass|up yours"),
    (Category::OffensivePhrases, RuleKind::Phrase, "eat shit|eat my"),
];

/// A compiled rule bound to exactly one category.
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub kind: RuleKind,
    pub regex: Regex,
}

/// Compiled, immutable lexicon. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct Lexicon {
    rules: Vec<Rule>,
}

impl Lexicon {
    /// Compile the built-in rule table.
    pub fn builtin() -> Result<Self> {
        Self::from_specs(BUILTIN_RULES)
    }

    /// Compile an arbitrary rule table.
    ///
    /// Phrase rules are moved ahead of word rules; relative order inside
    /// each group is kept. Fails on the first rule whose pattern does not
    /// compile.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());
        for &(category, kind, alternatives) in specs {
            let pattern = match kind {
                RuleKind::Word => format!(r"(?i)\b(?:{alternatives})\b"),
                RuleKind::Phrase => format!("(?i)(?:{alternatives})"),
            };
            let regex = Regex::new(&pattern).with_context(|| {
                format!("Invalid lexicon rule for category {category}: {alternatives}")
            })?;
            rules.push(Rule {
                category,
                kind,
                regex,
            });
        }

        // Stable sort: phrases first, insertion order otherwise preserved.
        rules.sort_by_key(|r| r.kind != RuleKind::Phrase);

        Ok(Self { rules })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules registered for a category.
    pub fn rule_count(&self, category: Category) -> usize {
        self.rules.iter().filter(|r| r.category == category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(lexicon.rules().len(), BUILTIN_RULES.len());
    }

    #[test]
    fn every_category_has_rules() {
        let lexicon = Lexicon::builtin().unwrap();
        for category in Category::ALL {
            assert!(lexicon.rule_count(category) > 0, "{category} has no rules");
        }
    }

    #[test]
    fn phrase_rules_come_first() {
        let lexicon = Lexicon::builtin().unwrap();
        let first_word = lexicon
            .rules()
            .iter()
            .position(|r| r.kind == RuleKind::Word)
            .unwrap();
        assert!(lexicon.rules()[..first_word]
            .iter()
            .all(|r| r.category == Category::OffensivePhrases));
        assert!(lexicon.rules()[first_word..]
            .iter()
            .all(|r| r.kind == RuleKind::Word));
    }

    #[test]
    fn weights_are_positive() {
        for category in Category::ALL {
            assert!(category.weight() > 0.0);
        }
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::IdentityAttacks).unwrap();
        assert_eq!(json, "\"identity_attacks\"");
        assert_eq!(Category::OffensivePhrases.to_string(), "offensive_phrases");
    }

    #[test]
    fn malformed_rule_is_an_error() {
        let specs: &[RuleSpec] = &[(Category::Hate, RuleKind::Word, "hate|(unclosed")];
        let err = Lexicon::from_specs(specs).unwrap_err();
        assert!(err.to_string().contains("hate"));
    }
}
