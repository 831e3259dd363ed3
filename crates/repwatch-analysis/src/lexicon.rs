//! Valence tables for the rule-based scorer.
//!
//! The base vocabulary is the VADER lexicon shipped with `vader_sentiment`; the tables
//! here are layered on top of it. Valences use the `[-4.0, 4.0]` scale. Keys are lowercase.

/// Brand and customer-service valences that replace the base entry for the same word:
/// delivery, support, refunds, product quality.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lovely", 2.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("likes", 1.8),
    ("great", 3.1),
    ("greatest", 3.2),
    ("good", 1.9),
    ("better", 1.9),
    ("best", 3.2),
    ("nice", 1.8),
    ("fine", 0.8),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("outstanding", 3.0),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("brilliant", 2.8),
    ("superb", 3.1),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("impressive", 2.3),
    ("impressed", 2.5),
    ("incredible", 2.8),
    ("beautiful", 2.9),
    ("delightful", 2.7),
    ("delighted", 2.9),
    ("happy", 2.7),
    ("happier", 2.4),
    ("glad", 2.0),
    ("pleased", 1.9),
    ("satisfied", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("grateful", 2.0),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("helpful", 1.8),
    ("friendly", 2.2),
    ("reliable", 1.9),
    ("fast", 1.0),
    ("quick", 1.0),
    ("smooth", 1.3),
    ("easy", 1.9),
    ("convenient", 1.9),
    ("comfortable", 1.5),
    ("clean", 1.7),
    ("fresh", 1.3),
    ("solid", 1.4),
    ("quality", 1.1),
    ("worth", 0.9),
    ("win", 2.8),
    ("winning", 2.4),
    ("won", 2.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("fixed", 1.0),
    ("resolved", 1.7),
    ("innovative", 2.0),
    ("fun", 2.3),
    ("cool", 1.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("wow", 2.8),
    ("yay", 2.4),
    ("cheers", 2.1),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("kudos", 2.3),
    ("trust", 2.3),
    ("trusted", 2.1),
    ("safe", 1.9),
    ("secure", 1.4),
    ("support", 1.7),
    ("supportive", 1.9),
    ("generous", 2.3),
    ("affordable", 1.5),
    ("bargain", 0.8),
    ("stunning", 2.9),
    ("gorgeous", 3.0),
    ("elegant", 2.1),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("loyal", 2.1),
    ("positive", 2.6),
    ("stellar", 2.8),
    ("top", 0.8),
    ("strong", 2.3),
    ("popular", 1.8),
    ("promising", 1.7),
    ("proud", 2.1),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("calm", 1.3),
    ("care", 2.2),
    ("caring", 2.2),
    ("wins", 2.7),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("lol", 2.9),
    ("haha", 2.0),
    ("yes", 1.7),
    // Negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("poorly", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("dislike", -1.6),
    ("upset", -1.6),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("frustration", -2.1),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("unhappy", -1.8),
    ("sad", -2.1),
    ("sorry", -0.3),
    ("broken", -1.9),
    ("broke", -1.8),
    ("break", -1.2),
    ("damaged", -2.2),
    ("damage", -2.2),
    ("defective", -1.9),
    ("faulty", -1.8),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -1.8),
    ("failure", -2.3),
    ("crash", -1.7),
    ("crashed", -1.7),
    ("crashes", -1.6),
    ("bug", -1.2),
    ("buggy", -1.6),
    ("glitch", -1.2),
    ("delay", -1.3),
    ("delayed", -1.2),
    ("delays", -1.3),
    ("late", -0.9),
    ("slow", -1.1),
    ("lost", -1.3),
    ("missing", -1.2),
    ("wrong", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -0.8),
    ("issues", -0.8),
    ("complaint", -1.5),
    ("complain", -1.5),
    ("complained", -1.5),
    ("refund", -0.6),
    ("scam", -2.7),
    ("fraud", -2.8),
    ("fake", -2.1),
    ("ripoff", -2.4),
    ("overpriced", -1.7),
    ("expensive", -0.9),
    ("useless", -1.8),
    ("worthless", -1.9),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("rude", -2.0),
    ("unacceptable", -2.0),
    ("ridiculous", -1.5),
    ("pathetic", -2.3),
    ("disgusting", -2.4),
    ("dangerous", -2.1),
    ("unsafe", -2.0),
    ("recall", -1.4),
    ("lawsuit", -1.9),
    ("sue", -1.5),
    ("warning", -1.4),
    ("risk", -1.1),
    ("concern", -0.8),
    ("concerned", -1.3),
    ("worried", -1.2),
    ("worry", -1.9),
    ("confusing", -1.3),
    ("confused", -1.3),
    ("ignored", -1.4),
    ("unresponsive", -1.6),
    ("nightmare", -2.4),
    ("mess", -1.5),
    ("painful", -2.0),
    ("pain", -2.3),
    ("sucks", -1.5),
    ("suck", -1.9),
    ("crap", -1.6),
    ("trash", -1.5),
    ("garbage", -1.9),
    ("cancel", -0.7),
    ("cancelled", -1.0),
    ("canceled", -1.0),
    ("outage", -1.6),
    ("down", -0.9),
    ("leak", -1.4),
    ("leaked", -1.5),
    ("breach", -2.0),
    ("hacked", -1.7),
    ("stolen", -2.2),
    ("misleading", -1.9),
    ("dishonest", -2.7),
    ("negative", -2.7),
    ("weak", -1.9),
    ("unreliable", -1.6),
    ("shame", -2.1),
    ("shameful", -2.2),
    ("avoid", -1.2),
    ("regret", -1.8),
    ("furious", -2.7),
    ("outraged", -2.3),
    ("boycott", -1.3),
    ("no", -1.2),
];

/// Lukewarm words that carry no polarity in brand feedback ("okay, nothing special").
pub(crate) const NEUTRAL_TERMS: &[&str] = &["okay", "ok", "special"];

/// Intensifiers and dampeners. Positive entries push a following sentiment word further
/// from zero; negative entries pull it toward zero.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCR),
    ("amazingly", BOOST_INCR),
    ("awfully", BOOST_INCR),
    ("completely", BOOST_INCR),
    ("deeply", BOOST_INCR),
    ("enormously", BOOST_INCR),
    ("entirely", BOOST_INCR),
    ("especially", BOOST_INCR),
    ("exceptionally", BOOST_INCR),
    ("extremely", BOOST_INCR),
    ("fully", BOOST_INCR),
    ("greatly", BOOST_INCR),
    ("highly", BOOST_INCR),
    ("hugely", BOOST_INCR),
    ("incredibly", BOOST_INCR),
    ("intensely", BOOST_INCR),
    ("majorly", BOOST_INCR),
    ("more", BOOST_INCR),
    ("most", BOOST_INCR),
    ("particularly", BOOST_INCR),
    ("quite", BOOST_INCR),
    ("really", BOOST_INCR),
    ("remarkably", BOOST_INCR),
    ("so", BOOST_INCR),
    ("super", BOOST_INCR),
    ("thoroughly", BOOST_INCR),
    ("totally", BOOST_INCR),
    ("tremendously", BOOST_INCR),
    ("truly", BOOST_INCR),
    ("unbelievably", BOOST_INCR),
    ("utterly", BOOST_INCR),
    ("very", BOOST_INCR),
    ("almost", BOOST_DECR),
    ("barely", BOOST_DECR),
    ("hardly", BOOST_DECR),
    ("kinda", BOOST_DECR),
    ("less", BOOST_DECR),
    ("little", BOOST_DECR),
    ("marginally", BOOST_DECR),
    ("occasionally", BOOST_DECR),
    ("partly", BOOST_DECR),
    ("scarcely", BOOST_DECR),
    ("slightly", BOOST_DECR),
    ("somewhat", BOOST_DECR),
    ("sorta", BOOST_DECR),
];

pub(crate) const BOOST_INCR: f64 = 0.293;
pub(crate) const BOOST_DECR: f64 = -0.293;

/// Tokens that flip the polarity of a sentiment word up to three tokens later.
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt",
    "shouldnt", "couldnt", "havent", "hasnt", "hadnt", "aint", "without", "rarely", "seldom",
    "despite",
];
