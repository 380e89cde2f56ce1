//! Default vocabulary.
//!
//! Every word has at least two distinct characters and appears once.

pub(crate) const BUILTIN_VOCABULARY: &[(&str, &str)] = &[
    ("abandon", "To leave something or someone behind completely"),
    ("benevolent", "Well meaning and kindly"),
    ("candid", "Truthful and straightforward; frank"),
    ("diligent", "Showing care and effort in one's work or duties"),
    ("eloquent", "Fluent or persuasive in speaking or writing"),
    ("frugal", "Sparing or economical with money or food"),
    ("gregarious", "Fond of company; sociable"),
    ("humble", "Having a modest estimate of one's own importance"),
    ("inevitable", "Certain to happen; unavoidable"),
    ("jubilant", "Feeling or expressing great happiness and triumph"),
    ("keen", "Having or showing eagerness or enthusiasm"),
    ("lucid", "Expressed clearly; easy to understand"),
    ("meticulous", "Showing great attention to detail; very careful"),
    ("nostalgia", "A sentimental longing for a period in the past"),
    ("obscure", "Not discovered or known about; uncertain"),
    ("pragmatic", "Dealing with things sensibly and realistically"),
    ("quaint", "Attractively unusual or old-fashioned"),
    ("resilient", "Able to recover quickly from difficult conditions"),
    ("serene", "Calm, peaceful, and untroubled"),
    ("tenacious", "Tending to keep a firm hold of something; persistent"),
    ("ubiquitous", "Present, appearing, or found everywhere"),
    ("vivid", "Producing powerful feelings or strong, clear images"),
    ("wary", "Feeling or showing caution about possible dangers"),
    ("xenial", "Relating to hospitality toward guests"),
    ("yearn", "To have an intense feeling of longing for something"),
    ("zealous", "Having great energy or enthusiasm for a cause"),
    ("ambiguous", "Open to more than one interpretation"),
    ("brevity", "Concise and exact use of words"),
    ("cordial", "Warm and friendly"),
    ("placid", "Not easily upset or excited"),
];
