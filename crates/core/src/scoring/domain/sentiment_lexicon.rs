//! Embedded sentiment word list.
//!
//! Weights follow the AFINN convention of integer valences in [-5, 5],
//! rescaled to [-1.0, 1.0]. The list is trimmed to vocabulary that actually
//! shows up in customer-service calls.

pub(crate) const WEIGHTED_WORDS: &[(&str, f64)] = &[
    // Positive.
    ("excellent", 1.0),
    ("outstanding", 1.0),
    ("superb", 1.0),
    ("perfect", 1.0),
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("fantastic", 0.8),
    ("wonderful", 0.8),
    ("delighted", 0.8),
    ("great", 0.6),
    ("good", 0.6),
    ("happy", 0.6),
    ("glad", 0.6),
    ("pleased", 0.6),
    ("pleasure", 0.6),
    ("love", 0.6),
    ("loved", 0.6),
    ("nice", 0.6),
    ("best", 0.6),
    ("satisfied", 0.6),
    ("impressed", 0.6),
    ("helpful", 0.4),
    ("like", 0.4),
    ("liked", 0.4),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("appreciate", 0.4),
    ("appreciated", 0.4),
    ("welcome", 0.4),
    ("resolved", 0.4),
    ("solved", 0.4),
    ("fixed", 0.4),
    ("easy", 0.4),
    ("quick", 0.4),
    ("quickly", 0.4),
    ("fast", 0.4),
    ("friendly", 0.4),
    ("polite", 0.4),
    ("kind", 0.4),
    ("patient", 0.4),
    ("fine", 0.4),
    ("better", 0.4),
    ("satisfaction", 0.4),
    ("smooth", 0.4),
    ("clear", 0.2),
    ("correct", 0.2),
    // Negative.
    ("worst", -1.0),
    ("terrible", -0.8),
    ("horrible", -0.8),
    ("awful", -0.8),
    ("angry", -0.8),
    ("furious", -0.8),
    ("rude", -0.8),
    ("unacceptable", -0.8),
    ("hate", -0.8),
    ("hated", -0.8),
    ("scam", -0.8),
    ("bad", -0.6),
    ("poor", -0.6),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("unhappy", -0.6),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("annoyed", -0.6),
    ("annoying", -0.6),
    ("upset", -0.6),
    ("useless", -0.6),
    ("waste", -0.6),
    ("wasted", -0.6),
    ("crash", -0.6),
    ("crashed", -0.6),
    ("overcharged", -0.6),
    ("broken", -0.4),
    ("broke", -0.4),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("problem", -0.4),
    ("problems", -0.4),
    ("issue", -0.4),
    ("issues", -0.4),
    ("error", -0.4),
    ("errors", -0.4),
    ("wrong", -0.4),
    ("slow", -0.4),
    ("late", -0.4),
    ("delay", -0.4),
    ("delayed", -0.4),
    ("cancel", -0.4),
    ("cancelled", -0.4),
    ("complaint", -0.4),
    ("complain", -0.4),
    ("dislike", -0.4),
    ("difficult", -0.4),
    ("confusing", -0.4),
    ("confused", -0.4),
    ("stuck", -0.4),
    ("waiting", -0.2),
];

/// Words that flip and dampen the valence of the word that follows.
pub(crate) const NEGATORS: &[&str] = &[
    "not",
    "no",
    "never",
    "neither",
    "nor",
    "cannot",
    "can't",
    "don't",
    "didn't",
    "doesn't",
    "won't",
    "wasn't",
    "weren't",
    "isn't",
    "aren't",
    "couldn't",
    "wouldn't",
    "shouldn't",
];
