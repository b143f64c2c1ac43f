//! Closed-class words and common command verbs for [`LexiconTagger`].
//!
//! Lookups take lowercased words. Anything not listed here is left to the
//! tagger's shape heuristics, which is why content nouns are absent.
//!
//! [`LexiconTagger`]: crate::tag::LexiconTagger

use crate::tag::PartOfSpeech;

pub(crate) fn lookup(word: &str) -> Option<PartOfSpeech> {
    use PartOfSpeech::*;

    let tag = match word {
        "i" | "me" | "you" | "he" | "she" | "it" | "we" | "they" | "him" | "us" | "them"
        | "myself" | "yourself" | "itself" | "ourselves" | "themselves" => Pronoun,

        "my" | "your" | "his" | "her" | "its" | "our" | "their" => PossessivePronoun,

        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any" | "each"
        | "every" | "all" | "both" | "either" | "neither" | "no" | "another" => Determiner,

        "which" | "whatever" | "whichever" => WhDeterminer,
        "what" | "who" | "whom" | "whose" => WhPronoun,
        "how" | "when" | "where" | "why" => WhAdverb,

        "there" => Existential,

        "and" | "or" | "but" | "nor" | "plus" => CoordinatingConjunction,

        "to" => To,

        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "about" | "from" | "into" | "onto"
        | "over" | "under" | "between" | "through" | "during" | "before" | "after" | "above"
        | "below" | "against" | "without" | "within" | "across" | "per" | "via" | "like"
        | "than" | "if" | "because" | "while" | "since" | "until" | "as" => Preposition,

        "up" | "down" | "off" | "out" | "away" | "back" => Particle,

        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must"
        | "'d" | "'ll" => Modal,

        "'s" => Possessive,

        "'m" | "am" | "'re" | "are" | "do" | "have" | "'ve" => PresentVerb,
        "is" | "does" | "has" => ThirdPersonVerb,
        "was" | "were" | "did" | "had" => PastVerb,
        "been" | "done" | "gone" | "given" | "taken" | "shown" => PastParticiple,
        "be" => Verb,

        "get" | "give" | "show" | "tell" | "list" | "find" | "want" | "need" | "make" | "let"
        | "set" | "use" | "run" | "start" | "stop" | "restart" | "create" | "delete"
        | "remove" | "add" | "open" | "close" | "scale" | "deploy" | "increase"
        | "decrease" | "reduce" | "change" | "update" | "check" | "see" | "look" | "know"
        | "display" | "fetch" | "pull" | "push" | "send" | "build" | "install" | "configure"
        | "enable" | "disable" | "describe" | "help" | "go" | "take" | "put" | "keep"
        | "try" | "bind" | "unbind" | "monitor" | "watch" | "search" | "query" | "view"
        | "rename" | "move" | "copy" | "apply" | "assign" | "file" | "raise" | "report"
        | "clean" | "reset" | "please" => Verb,

        "very" | "just" | "also" | "now" | "then" | "again" | "only" | "still" | "too"
        | "here" | "not" | "n't" | "currently" | "quickly" | "maybe" | "more" | "less"
        | "most" | "least" | "much" => Adverb,

        "new" | "old" | "current" | "latest" | "last" | "first" | "next" | "other" | "same"
        | "big" | "small" | "high" | "low" | "many" | "few" | "several" | "own" | "good"
        | "bad" | "available" | "total" => Adjective,

        "yes" | "ok" | "okay" | "hi" | "hello" | "hey" | "thanks" => Interjection,

        "zero" | "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight"
        | "nine" | "ten" | "eleven" | "twelve" | "thirteen" | "fourteen" | "fifteen"
        | "sixteen" | "seventeen" | "eighteen" | "nineteen" | "twenty" | "thirty" | "forty"
        | "fifty" | "sixty" | "seventy" | "eighty" | "ninety" | "hundred" | "thousand"
        | "million" => Cardinal,

        _ => return None,
    };

    Some(tag)
}

/// Nouns that read as verbs after "to": "to issue", "to record".
pub(crate) fn has_verb_reading(word: &str) -> bool {
    matches!(
        word,
        "issue" | "record" | "order" | "schedule" | "log" | "tag" | "ping" | "backup"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_knows_closed_class_words() {
        assert_eq!(lookup("i"), Some(PartOfSpeech::Pronoun));
        assert_eq!(lookup("the"), Some(PartOfSpeech::Determiner));
        assert_eq!(lookup("get"), Some(PartOfSpeech::Verb));
        assert_eq!(lookup("ten"), Some(PartOfSpeech::Cardinal));
    }

    #[test]
    fn it_leaves_content_nouns_alone() {
        assert_eq!(lookup("database"), None);
        assert_eq!(lookup("memory"), None);
    }
}
