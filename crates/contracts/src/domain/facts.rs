/// Интересные факты. Идентичность факта — его позиция в списке.
pub const FACTS: [&str; 5] = [
    "Dogs have a sense of smell that's up to 100,000 times stronger than humans.",
    "The Basenji is the only breed of dog that can't bark, but they can yodel!",
    "A dog's nose print is unique, much like a human's fingerprint.",
    "Greyhounds can run up to 45 miles per hour, making them the fastest dogs.",
    "The tallest dog ever recorded was a Great Dane named Zeus, who stood 44 inches tall.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedFact {
    /// Позиция, начиная с 1
    pub position: usize,
    pub text: &'static str,
}

pub fn numbered_facts() -> impl Iterator<Item = NumberedFact> {
    FACTS.into_iter().enumerate().map(|(index, text)| NumberedFact {
        position: index + 1,
        text,
    })
}
